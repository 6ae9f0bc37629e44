//! Bottom status bar — view summary plus the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::transform::smoothing;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    // Panel hints
    spans.push(Span::styled(" 1:Series 2:View 3:Help q:Quit", theme::muted()));

    // View summary
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!(
            "{} · {} · {}–{}%",
            app.view.mode.label(),
            smoothing::preset_label(app.view.smoothing),
            app.view.range.lo(),
            app.view.range.hi(),
        ),
        theme::secondary(),
    ));

    // Status message
    if let Some((message, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
