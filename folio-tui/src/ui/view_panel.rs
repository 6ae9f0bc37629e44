//! Lower panel 2 — range slider and display options.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::domain::ValueMode;
use folio_core::transform::smoothing;

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::slider;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let range = app.view.range;
    let rail_width = area.width.saturating_sub(4).clamp(10, 80);
    let mut rail_spans = vec![Span::raw("  ")];
    rail_spans.extend(slider::rail(rail_width, range.lo(), range.hi()));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Date Range   ", theme::secondary()),
            Span::styled(
                format!("{}% – {}%", range.lo(), range.hi()),
                theme::accent(),
            ),
            Span::styled(window_dates(app), theme::muted()),
        ]),
        Line::from(rail_spans),
        Line::from(""),
        choice_line(
            "Smoothing    ",
            smoothing::PRESETS.iter().map(|(_, label)| *label),
            smoothing::preset_label(app.view.smoothing),
        ),
        choice_line(
            "Mode         ",
            [ValueMode::Absolute.label(), ValueMode::Relative.label()],
            app.view.mode.label(),
        ),
        toggle_line("Grid         ", app.view.show_grid, String::new()),
        toggle_line(
            "Baseline     ",
            app.view.show_baseline,
            format!("  (y = {:.0})", app.view.mode.baseline()),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "h/l low handle · H/L high handle · 0 full range · s smoothing · v mode · g grid · b baseline",
            theme::muted(),
        )),
    ];

    // Drop trailing hint lines if the panel is tight.
    lines.truncate(area.height as usize);
    f.render_widget(Paragraph::new(lines), area);
}

/// Resolved dates of the current window, e.g. " (03 Feb 2023 – 11 Nov 2024)".
fn window_dates(app: &AppState) -> String {
    let Some(dataset) = app.dataset() else {
        return String::new();
    };
    let (start, end) = app.view.range.indices(dataset.points.len());
    if start >= end {
        return "  (empty window)".into();
    }
    let first = dataset.points[start].date.format("%d %b %Y");
    let last = dataset.points[end - 1].date.format("%d %b %Y");
    format!("  ({first} – {last})")
}

fn choice_line<'a>(
    label: &'static str,
    options: impl IntoIterator<Item = &'a str>,
    current: &str,
) -> Line<'static> {
    let mut spans = vec![Span::styled(label, theme::secondary())];
    for (i, option) in options.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme::muted()));
        }
        let style = if option == current {
            theme::title()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(option.to_string(), style));
    }
    Line::from(spans)
}

fn toggle_line(label: &'static str, on: bool, suffix: String) -> Line<'static> {
    let state = if on {
        Span::styled("on", theme::accent())
    } else {
        Span::styled("off", theme::muted())
    };
    Line::from(vec![
        Span::styled(label, theme::secondary()),
        state,
        Span::styled(suffix, theme::muted()),
    ])
}
