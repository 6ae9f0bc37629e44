//! Top-level UI layout — chart on top, switchable lower panel, status bar.

pub mod chart_panel;
pub mod help_panel;
pub mod series_panel;
pub mod status_bar;
pub mod view_panel;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_chart(f, chunks[0], app);
    draw_lower_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

fn draw_chart(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Portfolio Performance Over Time ")
        .title_style(theme::title());
    let inner = block.inner(area);
    f.render_widget(block, area);
    chart_panel::render(f, inner, app);
}

fn draw_lower_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Series => series_panel::render(f, inner, app),
        Panel::View => view_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}
