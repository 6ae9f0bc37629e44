//! Loaded dataset: ordered series metadata plus the date-ordered samples.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{SeriesCategory, SeriesMeta, TimePoint};

/// A fully decoded spreadsheet.
///
/// `series` preserves sheet row order; `points` preserves the date axis with
/// strictly increasing dates. Series names are unique within one dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub series: Vec<SeriesMeta>,
    pub points: Vec<TimePoint>,
}

impl Dataset {
    pub fn new(series: Vec<SeriesMeta>, points: Vec<TimePoint>) -> Self {
        Self { series, points }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty() || self.points.is_empty()
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|meta| meta.name.as_str())
    }

    /// Names of the series in one category, in row order.
    pub fn names_in(&self, category: SeriesCategory) -> Vec<&str> {
        self.series
            .iter()
            .filter(|meta| meta.category == category)
            .map(|meta| meta.name.as_str())
            .collect()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// The series' value in the first data column — defined or not. This is
    /// the reference the return transform divides by.
    pub fn first_value(&self, name: &str) -> Option<f64> {
        self.points
            .first()
            .and_then(|point| point.absolute.get(name).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
    }

    fn sample() -> Dataset {
        let series = vec![
            SeriesMeta::new("Growth", SeriesCategory::Fund),
            SeriesMeta::new("World", SeriesCategory::Index),
            SeriesMeta::new("Balanced", SeriesCategory::Fund),
        ];
        let mut p1 = TimePoint::new(date(1));
        p1.absolute.insert("Growth".into(), 100.0);
        let mut p2 = TimePoint::new(date(2));
        p2.absolute.insert("Growth".into(), 110.0);
        Dataset::new(series, vec![p1, p2])
    }

    #[test]
    fn names_in_preserves_row_order() {
        let dataset = sample();
        assert_eq!(
            dataset.names_in(SeriesCategory::Fund),
            vec!["Growth", "Balanced"]
        );
        assert_eq!(dataset.names_in(SeriesCategory::Index), vec!["World"]);
    }

    #[test]
    fn date_range_spans_first_to_last() {
        let dataset = sample();
        assert_eq!(dataset.date_range(), Some((date(1), date(2))));
        assert_eq!(Dataset::default().date_range(), None);
    }

    #[test]
    fn first_value_is_positional() {
        let dataset = sample();
        assert_eq!(dataset.first_value("Growth"), Some(100.0));
        // Defined later but not in the first column: no reference value.
        assert_eq!(dataset.first_value("World"), None);
    }
}
