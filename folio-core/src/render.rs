//! Chart description builder — the boundary between the pipeline and the
//! terminal renderer.
//!
//! Everything here is plain data; the TUI maps it onto ratatui widgets and
//! the CLI ignores it entirely.

use crate::domain::{Dataset, TimePoint, ValueMode};
use crate::transform::ViewState;

/// Fraction of the value range padded above and below the data.
const Y_PADDING: f64 = 0.05;

/// One renderable series.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: String,
    /// Stable palette index: the series' dataset row, so colors do not shift
    /// when other series are hidden.
    pub color_index: usize,
    /// Consecutive runs of defined values as (x, y). A missing value ends a
    /// segment, so gaps render as gaps.
    pub segments: Vec<Vec<(f64, f64)>>,
}

/// Everything the chart surface needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub tracks: Vec<Track>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub baseline: Option<f64>,
    pub show_grid: bool,
    pub mode: ValueMode,
}

/// Build the chart description for the processed window.
pub fn build(dataset: &Dataset, points: &[TimePoint], view: &ViewState) -> ChartSpec {
    let tracks: Vec<Track> = dataset
        .series
        .iter()
        .enumerate()
        .filter(|(_, meta)| view.is_visible(&meta.name))
        .map(|(row, meta)| build_track(points, &meta.name, row, view.mode))
        .collect();

    let baseline = view.show_baseline.then(|| view.mode.baseline());
    let (y_min, y_max) = y_bounds(&tracks, baseline);
    let x_max = points.len().saturating_sub(1) as f64;

    ChartSpec {
        x_labels: x_labels(points),
        y_labels: y_labels(y_min, y_max, view.mode),
        x_bounds: [0.0, x_max.max(1.0)],
        y_bounds: [y_min, y_max],
        baseline,
        show_grid: view.show_grid,
        mode: view.mode,
        tracks,
    }
}

fn build_track(points: &[TimePoint], name: &str, color_index: usize, mode: ValueMode) -> Track {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (index, point) in points.iter().enumerate() {
        match point.value(name, mode) {
            Some(value) => current.push((index as f64, value)),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    Track {
        name: name.to_string(),
        color_index,
        segments,
    }
}

/// Min/max over every visible value, padded, widened to include the
/// baseline when one is shown. Falls back to `[0, 100]` with no data.
fn y_bounds(tracks: &[Track], baseline: Option<f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for track in tracks {
        for segment in &track.segments {
            for (_, value) in segment {
                min = min.min(*value);
                max = max.max(*value);
            }
        }
    }
    if min > max {
        return (0.0, 100.0);
    }

    let mut padding = (max - min).abs() * Y_PADDING;
    if padding == 0.0 {
        padding = 1.0;
    }
    let mut lo = min - padding;
    let mut hi = max + padding;
    if let Some(y) = baseline {
        lo = lo.min(y);
        hi = hi.max(y);
    }
    (lo, hi)
}

/// First, middle, and last dates of the window as "Jan 23"-style labels.
fn x_labels(points: &[TimePoint]) -> Vec<String> {
    let format = |point: &TimePoint| point.date.format("%b %y").to_string();
    match points.len() {
        0 => Vec::new(),
        1 => vec![format(&points[0])],
        len => vec![
            format(&points[0]),
            format(&points[len / 2]),
            format(&points[len - 1]),
        ],
    }
}

fn y_labels(min: f64, max: f64, mode: ValueMode) -> Vec<String> {
    let fmt = |value: f64| match mode {
        ValueMode::Absolute => format!("{value:.1}"),
        ValueMode::Relative => format!("{value:.1}%"),
    };
    vec![fmt(min), fmt((min + max) / 2.0), fmt(max)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::{SeriesCategory, SeriesMeta};

    fn dataset_with_gap() -> Dataset {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let series = vec![
            SeriesMeta::new("A", SeriesCategory::Fund),
            SeriesMeta::new("B", SeriesCategory::Index),
        ];
        let values = [Some(100.0), Some(110.0), None, Some(130.0)];
        let points = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let mut point = TimePoint::new(start + chrono::Duration::days(i as i64));
                if let Some(v) = value {
                    point.absolute.insert("A".into(), *v);
                }
                point.absolute.insert("B".into(), 90.0);
                point
            })
            .collect();
        Dataset::new(series, points)
    }

    #[test]
    fn gaps_split_tracks_into_segments() {
        let dataset = dataset_with_gap();
        let view = ViewState::for_dataset(&dataset);
        let spec = build(&dataset, &dataset.points, &view);

        let a = spec.tracks.iter().find(|t| t.name == "A").unwrap();
        assert_eq!(a.segments.len(), 2);
        assert_eq!(a.segments[0], vec![(0.0, 100.0), (1.0, 110.0)]);
        assert_eq!(a.segments[1], vec![(3.0, 130.0)]);
    }

    #[test]
    fn hidden_series_are_not_rendered_but_colors_stay_stable() {
        let dataset = dataset_with_gap();
        let mut view = ViewState::for_dataset(&dataset);
        view.toggle("A");
        let spec = build(&dataset, &dataset.points, &view);

        assert_eq!(spec.tracks.len(), 1);
        assert_eq!(spec.tracks[0].name, "B");
        // B keeps its row color even with A hidden.
        assert_eq!(spec.tracks[0].color_index, 1);
    }

    #[test]
    fn y_bounds_pad_and_include_the_baseline() {
        let dataset = dataset_with_gap();
        let view = ViewState::for_dataset(&dataset);
        let spec = build(&dataset, &dataset.points, &view);

        // Data spans 90..130; padding 5% of 40 = 2, baseline 100 is inside.
        assert_eq!(spec.baseline, Some(100.0));
        assert!(spec.y_bounds[0] <= 88.0 + 1e-9);
        assert!(spec.y_bounds[1] >= 132.0 - 1e-9);
    }

    #[test]
    fn relative_mode_moves_the_baseline_to_zero() {
        let dataset = dataset_with_gap();
        let mut view = ViewState::for_dataset(&dataset);
        view.mode = ValueMode::Relative;
        let spec = build(&dataset, &dataset.points, &view);

        assert_eq!(spec.baseline, Some(0.0));
        assert!(spec.y_labels.iter().all(|label| label.ends_with('%')));
    }

    #[test]
    fn baseline_off_means_none() {
        let dataset = dataset_with_gap();
        let mut view = ViewState::for_dataset(&dataset);
        view.show_baseline = false;
        let spec = build(&dataset, &dataset.points, &view);
        assert_eq!(spec.baseline, None);
    }

    #[test]
    fn empty_window_gets_neutral_bounds() {
        let dataset = Dataset::default();
        let view = ViewState::for_dataset(&dataset);
        let spec = build(&dataset, &[], &view);
        assert_eq!(spec.y_bounds[0], 0.0);
        assert_eq!(spec.y_bounds[1], 100.0);
        assert!(spec.x_labels.is_empty());
    }
}
