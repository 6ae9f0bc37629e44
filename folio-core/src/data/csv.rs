//! CSV decoding — the plain-text fallback for the workbook format.
//!
//! Same shape as the workbook: header row of dates, one series per row.

use crate::config::CategoryRules;
use crate::domain::Dataset;

use super::error::{LoadError, ParseError};
use super::sheet::{self, Cell, Grid};

pub fn load_bytes(bytes: Vec<u8>, rules: &CategoryRules) -> Result<Dataset, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut grid: Grid = Vec::new();
    for record in reader.records() {
        let record = record.map_err(ParseError::from)?;
        grid.push(record.iter().map(convert_field).collect());
    }
    if grid.is_empty() {
        return Err(LoadError::Empty);
    }
    sheet::build_dataset(grid, rules)
}

/// A field is a date if it parses as one, then a number, otherwise text.
fn convert_field(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Some(date) = sheet::parse_date(trimmed) {
        return Cell::Date(date);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return if value.is_finite() {
            Cell::Number(value)
        } else {
            Cell::Empty
        };
    }
    Cell::Text(trimmed.to_string())
}
