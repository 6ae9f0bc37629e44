//! Percent-change-from-start computation.

use crate::domain::Dataset;

/// Fill each point's relative map: percent change vs. the series' value in
/// the first data column.
///
/// The reference is the value at position 0 — not the first date where the
/// series happens to be defined. Index 0 is always exactly 0. With a missing
/// or zero reference the relative track stays undefined past index 0; the
/// division is never allowed to produce Infinity or NaN.
pub fn compute_relative(dataset: &mut Dataset) {
    let names: Vec<String> = dataset.series_names().map(String::from).collect();
    for name in &names {
        let first = dataset.first_value(name);
        for (index, point) in dataset.points.iter_mut().enumerate() {
            if index == 0 {
                point.relative.insert(name.clone(), 0.0);
                continue;
            }
            let (Some(first), Some(value)) = (first, point.absolute.get(name).copied()) else {
                continue;
            };
            if first == 0.0 {
                continue;
            }
            point
                .relative
                .insert(name.clone(), (value - first) / first * 100.0);
        }
    }
}
