//! End-to-end pipeline checks over a small hand-checked dataset.

use chrono::NaiveDate;
use folio_core::config::CategoryRules;
use folio_core::data::{self, Source};
use folio_core::domain::ValueMode;
use folio_core::render;
use folio_core::transform::{RangePct, ViewState};
use std::io::Write;

const EPSILON: f64 = 1e-9;

fn write_fixture(dir: &tempfile::TempDir, content: &str) -> Source {
    let path = dir.path().join("returns.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    Source::parse(path.to_str().unwrap())
}

#[test]
fn relative_and_smoothed_values_match_hand_computation() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        &dir,
        "Series,2023-01-01,2023-01-02,2023-01-03,2023-01-04\n\
         A,100,110,121,100\n",
    );
    let dataset = data::load_dataset(&source, &CategoryRules::default()).unwrap();

    let relative: Vec<f64> = dataset
        .points
        .iter()
        .map(|p| p.relative["A"])
        .collect();
    for (got, want) in relative.iter().zip([0.0, 10.0, 21.0, 0.0]) {
        assert!((got - want).abs() < EPSILON, "relative {got} != {want}");
    }

    let mut view = ViewState::for_dataset(&dataset);
    view.smoothing = 2;
    let smoothed = view.apply(&dataset);
    let absolute: Vec<f64> = smoothed.iter().map(|p| p.absolute["A"]).collect();
    for (got, want) in absolute.iter().zip([100.0, 105.0, 115.5, 110.5]) {
        assert!((got - want).abs() < EPSILON, "absolute {got} != {want}");
    }
}

#[test]
fn full_range_view_is_the_loaded_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        &dir,
        "Series,2023-01-01,2023-01-02,2023-01-03\n\
         A,100,110,121\n",
    );
    let dataset = data::load_dataset(&source, &CategoryRules::default()).unwrap();

    let view = ViewState::for_dataset(&dataset);
    assert!(view.range.is_full());
    assert_eq!(view.apply(&dataset), dataset.points);
}

#[test]
fn range_then_smoothing_only_sees_the_window() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        &dir,
        "Series,2023-01-01,2023-01-02,2023-01-03,2023-01-04\n\
         A,10,20,30,40\n",
    );
    let dataset = data::load_dataset(&source, &CategoryRules::default()).unwrap();

    let mut view = ViewState::for_dataset(&dataset);
    view.range = RangePct::new(50, 100);
    view.smoothing = 2;
    let points = view.apply(&dataset);

    // Window is [30, 40]; the 20 outside it never enters a mean.
    assert_eq!(points.len(), 2);
    assert!((points[0].absolute["A"] - 30.0).abs() < EPSILON);
    assert!((points[1].absolute["A"] - 35.0).abs() < EPSILON);
}

#[test]
fn chart_spec_reflects_the_view_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_fixture(
        &dir,
        "Series,2023-01-01,2023-01-02\n\
         Growth Portfolio,100,120\n\
         MSCI World,100,90\n",
    );
    let dataset = data::load_dataset(&source, &CategoryRules::default()).unwrap();

    let mut view = ViewState::for_dataset(&dataset);
    view.mode = ValueMode::Relative;
    view.toggle("MSCI World");
    let points = view.apply(&dataset);
    let spec = render::build(&dataset, &points, &view);

    assert_eq!(spec.tracks.len(), 1);
    assert_eq!(spec.tracks[0].name, "Growth Portfolio");
    assert_eq!(spec.baseline, Some(0.0));
    assert_eq!(
        spec.tracks[0].segments[0],
        vec![(0.0, 0.0), (1.0, 20.0)]
    );
}

#[test]
fn demo_dataset_flows_through_the_whole_pipeline() {
    let dataset = data::demo_dataset();
    assert!(!dataset.is_empty());
    // Relative returns were derived for every series at index 0.
    for name in dataset.series_names() {
        assert_eq!(dataset.points[0].relative.get(name), Some(&0.0));
    }

    let mut view = ViewState::for_dataset(&dataset);
    view.range = RangePct::new(10, 90);
    view.smoothing = 7;
    let points = view.apply(&dataset);
    let spec = render::build(&dataset, &points, &view);
    assert_eq!(spec.tracks.len(), dataset.series.len());
    assert_eq!(points.len(), 80);
}
