//! View state — the single snapshot that drives every recomputation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::ViewDefaults;
use crate::domain::{Dataset, SeriesCategory, TimePoint, ValueMode};

use super::range::{self, RangePct};
use super::smoothing;

/// Everything the user can change, in one value.
///
/// Event handlers produce a new snapshot; the pipeline re-runs from the full
/// dataset on every change. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Names of the currently visible series.
    pub visible: BTreeSet<String>,
    pub range: RangePct,
    /// Trailing window in samples; 1 means no smoothing.
    pub smoothing: usize,
    pub mode: ValueMode,
    pub show_grid: bool,
    pub show_baseline: bool,
}

impl ViewState {
    /// All series visible, full range, no smoothing.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            visible: dataset.series_names().map(String::from).collect(),
            range: RangePct::full(),
            smoothing: 1,
            mode: ValueMode::Absolute,
            show_grid: true,
            show_baseline: true,
        }
    }

    /// All series visible, display options from config.
    pub fn with_defaults(dataset: &Dataset, defaults: &ViewDefaults) -> Self {
        Self {
            smoothing: defaults.smoothing.max(1),
            mode: defaults.mode,
            show_grid: defaults.show_grid,
            show_baseline: defaults.show_baseline,
            ..Self::for_dataset(dataset)
        }
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.contains(name)
    }

    /// Flip one series.
    pub fn toggle(&mut self, name: &str) {
        if !self.visible.remove(name) {
            self.visible.insert(name.to_string());
        }
    }

    /// Show or hide every series in a category.
    pub fn set_category(&mut self, dataset: &Dataset, category: SeriesCategory, visible: bool) {
        for name in dataset.names_in(category) {
            if visible {
                self.visible.insert(name.to_string());
            } else {
                self.visible.remove(name);
            }
        }
    }

    /// Whether any series in the category is currently shown.
    pub fn any_visible_in(&self, dataset: &Dataset, category: SeriesCategory) -> bool {
        dataset
            .names_in(category)
            .iter()
            .any(|name| self.is_visible(name))
    }

    /// Run the per-view stages: range filter, then smoothing over the
    /// filtered window.
    pub fn apply(&self, dataset: &Dataset) -> Vec<TimePoint> {
        let windowed = range::apply(&dataset.points, self.range);
        smoothing::apply(&windowed, self.smoothing)
    }
}
