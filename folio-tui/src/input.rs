//! Keyboard dispatch — global toggles first, then panel-specific keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_core::domain::SeriesCategory;
use folio_core::transform::RangePct;

use crate::app::{AppState, Panel};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Series;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::View;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('g') => {
            app.view.show_grid = !app.view.show_grid;
            app.set_status(if app.view.show_grid {
                "Grid on"
            } else {
                "Grid off"
            });
            return;
        }
        KeyCode::Char('b') => {
            app.view.show_baseline = !app.view.show_baseline;
            app.set_status(if app.view.show_baseline {
                "Baseline on"
            } else {
                "Baseline off"
            });
            return;
        }
        KeyCode::Char('v') => {
            app.view.mode = app.view.mode.toggle();
            app.set_status(format!("Mode: {}", app.view.mode.label()));
            return;
        }
        KeyCode::Char('s') => {
            app.cycle_smoothing();
            return;
        }
        KeyCode::Char('r') => {
            app.set_status("Reloading dataset");
            app.request_load();
            return;
        }
        _ => {}
    }

    // 2. Panel-specific keys.
    match app.active_panel {
        Panel::Series => handle_series_key(app, key),
        Panel::View => handle_view_key(app, key),
        Panel::Help => {}
    }
}

fn handle_series_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_at_cursor(),
        KeyCode::Char('a') => app.set_category(SeriesCategory::Fund, true),
        KeyCode::Char('A') => app.set_category(SeriesCategory::Fund, false),
        KeyCode::Char('i') => app.set_category(SeriesCategory::Index, true),
        KeyCode::Char('I') => app.set_category(SeriesCategory::Index, false),
        _ => {}
    }
}

fn handle_view_key(app: &mut AppState, key: KeyEvent) {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('h') => app.view.range.nudge_lo(-1),
        KeyCode::Char('l') => app.view.range.nudge_lo(1),
        KeyCode::Char('H') => app.view.range.nudge_hi(-1),
        KeyCode::Char('L') => app.view.range.nudge_hi(1),
        KeyCode::Left if shift => app.view.range.nudge_hi(-1),
        KeyCode::Right if shift => app.view.range.nudge_hi(1),
        KeyCode::Left => app.view.range.nudge_lo(-1),
        KeyCode::Right => app.view.range.nudge_lo(1),
        KeyCode::Char('0') => app.view.range = RangePct::full(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::FolioConfig;
    use folio_core::data::synthetic;
    use folio_core::transform::returns;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> AppState {
        let (tx, _rx) = std::sync::mpsc::channel();
        let (_tx2, rx2) = std::sync::mpsc::channel();
        let mut app = AppState::new(tx, rx2, FolioConfig::default(), None);
        let mut dataset = synthetic::generate(20, 1);
        returns::compute_relative(&mut dataset);
        app.install_dataset(dataset);
        app
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn display_toggles_flip_the_view_snapshot() {
        let mut app = test_app();
        assert!(app.view.show_grid);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert!(!app.view.show_grid);
        handle_key(&mut app, press(KeyCode::Char('b')));
        assert!(!app.view.show_baseline);
        handle_key(&mut app, press(KeyCode::Char('v')));
        assert_eq!(
            app.view.mode,
            folio_core::domain::ValueMode::Relative
        );
    }

    #[test]
    fn slider_keys_move_the_handles_on_the_view_panel() {
        let mut app = test_app();
        app.active_panel = Panel::View;

        handle_key(&mut app, press(KeyCode::Char('l')));
        handle_key(&mut app, press(KeyCode::Char('l')));
        handle_key(&mut app, press(KeyCode::Char('H')));
        assert_eq!(app.view.range.lo(), 2);
        assert_eq!(app.view.range.hi(), 99);

        handle_key(&mut app, press(KeyCode::Char('0')));
        assert!(app.view.range.is_full());
    }

    #[test]
    fn bulk_keys_hide_and_show_groups() {
        let mut app = test_app();
        app.active_panel = Panel::Series;

        handle_key(&mut app, press(KeyCode::Char('A')));
        let dataset = app.dataset().unwrap();
        assert!(!app.view.any_visible_in(dataset, SeriesCategory::Fund));
        assert!(app.view.any_visible_in(dataset, SeriesCategory::Index));

        handle_key(&mut app, press(KeyCode::Char('a')));
        let dataset = app.dataset().unwrap();
        assert!(app.view.any_visible_in(dataset, SeriesCategory::Fund));
    }
}
