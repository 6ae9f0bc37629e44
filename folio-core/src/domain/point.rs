//! A single dated sample across all series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Absolute values or percent change relative to each series' start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueMode {
    Absolute,
    Relative,
}

impl ValueMode {
    pub fn toggle(self) -> Self {
        match self {
            ValueMode::Absolute => ValueMode::Relative,
            ValueMode::Relative => ValueMode::Absolute,
        }
    }

    /// Reference line height: the base value in absolute mode, zero percent
    /// change in relative mode.
    pub fn baseline(self) -> f64 {
        match self {
            ValueMode::Absolute => 100.0,
            ValueMode::Relative => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValueMode::Absolute => "Absolute",
            ValueMode::Relative => "Relative (%)",
        }
    }
}

/// One calendar date with per-series values.
///
/// Both maps are sparse: a series with no valid value at this date is simply
/// absent. Absence is the only "no data" representation — values are never
/// zero-filled and NaN never enters the maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: NaiveDate,
    /// Raw values from the sheet.
    pub absolute: BTreeMap<String, f64>,
    /// Percent change vs. the series' first column, filled in by the return
    /// transform.
    pub relative: BTreeMap<String, f64>,
}

impl TimePoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            absolute: BTreeMap::new(),
            relative: BTreeMap::new(),
        }
    }

    /// Value for `series` in the given mode, if defined.
    pub fn value(&self, series: &str, mode: ValueMode) -> Option<f64> {
        match mode {
            ValueMode::Absolute => self.absolute.get(series).copied(),
            ValueMode::Relative => self.relative.get(series).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
    }

    #[test]
    fn mode_toggle_round_trips() {
        assert_eq!(ValueMode::Absolute.toggle(), ValueMode::Relative);
        assert_eq!(ValueMode::Absolute.toggle().toggle(), ValueMode::Absolute);
    }

    #[test]
    fn baseline_per_mode() {
        assert_eq!(ValueMode::Absolute.baseline(), 100.0);
        assert_eq!(ValueMode::Relative.baseline(), 0.0);
    }

    #[test]
    fn value_reads_the_selected_map() {
        let mut point = TimePoint::new(date(1));
        point.absolute.insert("A".into(), 104.5);
        point.relative.insert("A".into(), 4.5);

        assert_eq!(point.value("A", ValueMode::Absolute), Some(104.5));
        assert_eq!(point.value("A", ValueMode::Relative), Some(4.5));
        assert_eq!(point.value("B", ValueMode::Absolute), None);
    }
}
