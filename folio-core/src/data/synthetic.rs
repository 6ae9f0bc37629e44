//! Synthetic demo dataset — deterministic trends plus bounded seeded noise.
//!
//! Used when no real spreadsheet is configured. The shapes mimic the real
//! data (five proposed portfolios, five benchmark indexes, daily samples)
//! but the values mean nothing.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Dataset, SeriesCategory, SeriesMeta, TimePoint};

pub const DEFAULT_POINTS: usize = 100;
pub const DEFAULT_SEED: u64 = 7;

const BASE_VALUE: f64 = 100.0;
const TREND_AMPLITUDE: f64 = 40.0;

/// (name, category, trend period in samples, amplitude factor, noise span)
const SERIES: &[(&str, SeriesCategory, f64, f64, f64)] = &[
    ("Aggressive Growth Portfolio", SeriesCategory::Fund, 10.0, 1.0, 20.0),
    ("Growth Portfolio", SeriesCategory::Fund, 10.0, 0.8, 15.0),
    ("Balanced Portfolio", SeriesCategory::Fund, 10.0, 0.6, 10.0),
    ("Moderate Portfolio", SeriesCategory::Fund, 10.0, 0.4, 8.0),
    ("Conservative Portfolio", SeriesCategory::Fund, 10.0, 0.2, 5.0),
    ("EURO STOXX 50", SeriesCategory::Index, 15.0, 1.0, 25.0),
    ("MSCI World", SeriesCategory::Index, 12.0, 0.7, 20.0),
    ("Global Aggregate Bond", SeriesCategory::Index, 20.0, 0.3, 15.0),
    ("IBEX 35", SeriesCategory::Index, 8.0, 1.0, 30.0),
    ("S&P 500", SeriesCategory::Index, 10.0, 0.9, 22.0),
];

/// Generate `points` daily samples starting 2023-01-01. Funds ride a sine
/// trend, indexes a cosine, each with its own period and amplitude, plus
/// uniform noise in `[0, noise span)` from the seeded RNG.
pub fn generate(points: usize, seed: u64) -> Dataset {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    let series: Vec<SeriesMeta> = SERIES
        .iter()
        .map(|(name, category, _, _, _)| SeriesMeta::new(*name, *category))
        .collect();

    let mut samples = Vec::with_capacity(points);
    for i in 0..points {
        let mut point = TimePoint::new(start + Duration::days(i as i64));
        for (name, category, period, amplitude, noise) in SERIES {
            let phase = i as f64 / period;
            let trend = match category {
                SeriesCategory::Fund => phase.sin(),
                SeriesCategory::Index => phase.cos(),
            };
            let value =
                BASE_VALUE + trend * TREND_AMPLITUDE * amplitude + rng.gen::<f64>() * noise;
            point.absolute.insert((*name).to_string(), value);
        }
        samples.push(point);
    }

    Dataset::new(series, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_seed() {
        assert_eq!(generate(50, 7), generate(50, 7));
        assert_ne!(generate(50, 7), generate(50, 8));
    }

    #[test]
    fn shape_matches_the_series_table() {
        let dataset = generate(DEFAULT_POINTS, DEFAULT_SEED);
        assert_eq!(dataset.points.len(), DEFAULT_POINTS);
        assert_eq!(dataset.series.len(), 10);
        assert_eq!(dataset.names_in(SeriesCategory::Fund).len(), 5);
        assert_eq!(dataset.names_in(SeriesCategory::Index).len(), 5);
        // Dense: every series defined at every point.
        for point in &dataset.points {
            assert_eq!(point.absolute.len(), 10);
        }
    }

    #[test]
    fn dates_are_strictly_increasing() {
        let dataset = generate(30, DEFAULT_SEED);
        for pair in dataset.points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}
