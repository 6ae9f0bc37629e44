//! Loading: source fetch, workbook/CSV decode, synthetic fallback.

mod csv;
mod error;
mod sheet;
mod source;
pub mod synthetic;
mod workbook;

pub use error::{LoadError, ParseError};
pub use source::Source;

use crate::config::CategoryRules;
use crate::domain::Dataset;
use crate::transform::returns;

/// Fetch, decode, and derive relative returns in one call.
pub fn load_dataset(source: &Source, rules: &CategoryRules) -> Result<Dataset, LoadError> {
    let mut dataset = source.load(rules)?;
    returns::compute_relative(&mut dataset);
    Ok(dataset)
}

/// The synthetic dataset, run through the same return transform a real
/// spreadsheet gets.
pub fn demo_dataset() -> Dataset {
    let mut dataset = synthetic::generate(synthetic::DEFAULT_POINTS, synthetic::DEFAULT_SEED);
    returns::compute_relative(&mut dataset);
    dataset
}
