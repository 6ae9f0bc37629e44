//! Lower panel 3 — keyboard reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("1 / 2 / 3", "switch lower panel (Series / View / Help)"),
    ("Tab / Shift+Tab", "cycle lower panel"),
    ("j / k, ↓ / ↑", "move the series cursor"),
    ("space / enter", "toggle series (or whole group on a header)"),
    ("a / A", "show / hide all funds"),
    ("i / I", "show / hide all indexes"),
    ("h / l", "move the low range handle"),
    ("H / L", "move the high range handle"),
    ("0", "reset the range to 0–100%"),
    ("s", "cycle smoothing (None / Weekly / Monthly / Quarterly)"),
    ("v", "absolute ↔ relative values"),
    ("g", "toggle grid"),
    ("b", "toggle baseline"),
    ("r", "reload the dataset"),
    ("q", "quit"),
];

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<16}"), theme::accent()),
                Span::styled(*action, theme::secondary()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}
