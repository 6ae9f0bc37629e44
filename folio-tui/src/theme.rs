//! Color tokens and the per-series line palette.
//!
//! Neon accents on the terminal's dark background: cyan for focus, steel
//! blue for secondary chrome, hot pink for failures.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan (focus, highlights)
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon orange (warnings)
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Hot pink (errors, failures)
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
/// Steel blue (muted chrome, disabled)
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Light gray (secondary text)
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);
/// Dark gray (emulated grid lines)
pub const GRID: Color = Color::Rgb(60, 60, 64);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn title() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        title()
    } else {
        muted()
    }
}

/// Highlight for the series-panel cursor row.
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Line colors assigned by dataset row order, wrapping past ten series.
pub const SERIES_PALETTE: &[Color] = &[
    Color::Rgb(0, 200, 83),    // green
    Color::Rgb(255, 145, 0),   // orange
    Color::Rgb(41, 98, 255),   // blue
    Color::Rgb(213, 0, 249),   // magenta
    Color::Rgb(0, 191, 165),   // teal
    Color::Rgb(255, 23, 68),   // red
    Color::Rgb(98, 0, 234),    // violet
    Color::Rgb(48, 79, 254),   // indigo
    Color::Rgb(100, 221, 23),  // lime
    Color::Rgb(255, 61, 0),    // deep orange
];

pub fn series_color(index: usize) -> Color {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
