//! Dual-handle percentage slider rendered as a text rail.

use ratatui::text::Span;

use crate::theme;

/// Column of a percent position on a rail `width` cells wide.
pub fn handle_column(pct: u8, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    (u32::from(pct.min(100)) * u32::from(width - 1) / 100) as u16
}

/// The rail as styled spans: muted outside the window, bright between the
/// two `●` handles.
pub fn rail(width: u16, lo: u8, hi: u8) -> Vec<Span<'static>> {
    let lo_col = handle_column(lo, width);
    let hi_col = handle_column(hi, width);
    (0..width)
        .map(|col| {
            let (symbol, style) = if col == lo_col || col == hi_col {
                ("●", theme::accent())
            } else if col > lo_col && col < hi_col {
                ("═", theme::accent())
            } else {
                ("─", theme::muted())
            };
            Span::styled(symbol, style)
        })
        .collect()
}
