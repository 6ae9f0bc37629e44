//! Trailing moving average over both value tracks.

use std::collections::BTreeMap;

use crate::domain::TimePoint;

/// Preset windows offered by the UI, in samples.
pub const PRESETS: &[(usize, &str)] = &[
    (1, "None"),
    (7, "Weekly"),
    (30, "Monthly"),
    (90, "Quarterly"),
];

pub fn preset_label(window: usize) -> &'static str {
    PRESETS
        .iter()
        .find(|(w, _)| *w == window)
        .map(|(_, label)| *label)
        .unwrap_or("Custom")
}

/// The preset after `window`, wrapping back to no smoothing.
pub fn next_preset(window: usize) -> usize {
    match PRESETS.iter().position(|(w, _)| *w == window) {
        Some(i) => PRESETS[(i + 1) % PRESETS.len()].0,
        None => PRESETS[0].0,
    }
}

/// Smooth with a trailing window of up to `window` samples.
///
/// Each output value is the mean of the series' defined values among the
/// up-to-`window` points ending at that index; the window shrinks at the
/// start of the sequence — no look-ahead, no wraparound. A window with no
/// defined values leaves the field absent. `window <= 1` returns the input
/// unchanged. Output length equals input length.
pub fn apply(points: &[TimePoint], window: usize) -> Vec<TimePoint> {
    if window <= 1 {
        return points.to_vec();
    }
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let trailing = &points[(index + 1).saturating_sub(window)..=index];
            TimePoint {
                date: point.date,
                absolute: window_mean(trailing, |p| &p.absolute),
                relative: window_mean(trailing, |p| &p.relative),
            }
        })
        .collect()
}

fn window_mean<'a>(
    window: &'a [TimePoint],
    field: impl Fn(&'a TimePoint) -> &'a BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for point in window {
        for (name, value) in field(point) {
            let entry = sums.entry(name.as_str()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(name, (sum, count))| (name.to_string(), sum / count as f64))
        .collect()
}
