//! Lower panel 1 — per-series visibility, grouped by category.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, SeriesRow};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = app.series_rows();
    if rows.is_empty() {
        let message = Paragraph::new(Span::styled(
            "No dataset loaded.",
            theme::muted(),
        ));
        f.render_widget(message, area);
        return;
    }

    let Some(dataset) = app.dataset() else { return };
    let height = area.height as usize;
    let offset = app.series_cursor.saturating_sub(height.saturating_sub(1));

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, row)| {
            let under_cursor = index == app.series_cursor;
            match row {
                SeriesRow::Header(category) => header_line(category.label(), under_cursor),
                SeriesRow::Series(name) => {
                    let color_index = dataset
                        .series
                        .iter()
                        .position(|meta| meta.name == *name)
                        .unwrap_or(0);
                    series_line(name, app.view.is_visible(name), color_index, under_cursor)
                }
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn header_line(label: &str, under_cursor: bool) -> Line<'static> {
    let style = if under_cursor {
        theme::selected()
    } else {
        theme::title()
    };
    Line::from(vec![
        Span::styled(format!("▾ {label}"), style),
        Span::styled("  (space toggles the whole group)", theme::muted()),
    ])
}

fn series_line(
    name: &str,
    visible: bool,
    color_index: usize,
    under_cursor: bool,
) -> Line<'static> {
    let cursor = if under_cursor { "▶ " } else { "  " };
    let checkbox = if visible { "[x] " } else { "[ ] " };
    let name_style = if under_cursor {
        theme::selected()
    } else if visible {
        theme::secondary()
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::styled(cursor.to_string(), theme::accent()),
        Span::styled(checkbox.to_string(), name_style),
        Span::styled(
            "── ",
            ratatui::style::Style::default().fg(theme::series_color(color_index)),
        ),
        Span::styled(name.to_string(), name_style),
    ])
}
