//! Raw grid → Dataset assembly shared by the workbook and CSV decoders.
//!
//! Both decoders normalize their native cells into [`Cell`] and hand the
//! row-major grid here. Row 0 is the header (dates from column 1 on); each
//! following row is one series with its name in column 0.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::CategoryRules;
use crate::domain::{Dataset, SeriesMeta, TimePoint};

use super::error::{LoadError, ParseError};

/// One decoded cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Empty,
}

/// Row-major grid of decoded cells.
pub type Grid = Vec<Vec<Cell>>;

/// Textual date formats accepted in header cells, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y"];

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Assemble a dataset from the raw grid.
///
/// Header cells that do not hold a date drop that column index for every
/// row, as do columns whose date is not strictly after the previous kept
/// one. Non-numeric and NaN data cells are omitted from their TimePoint.
pub fn build_dataset(grid: Grid, rules: &CategoryRules) -> Result<Dataset, LoadError> {
    let mut rows = grid.into_iter();
    let header = rows.next().ok_or(LoadError::Empty)?;
    let rows: Vec<Vec<Cell>> = rows.collect();
    if rows.is_empty() {
        return Err(LoadError::NoDataRows);
    }

    let date_columns = date_axis(&header);
    if date_columns.is_empty() {
        return Err(ParseError::NoDateColumns.into());
    }

    // Series names in row order. A repeated name gets a numbered suffix so
    // every row stays a distinct series while names remain unique keys.
    let mut series: Vec<SeriesMeta> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut named_rows: Vec<(String, Vec<Cell>)> = Vec::new();
    for (row_index, row) in rows.into_iter().enumerate() {
        let name = match row.first().and_then(cell_text) {
            Some(name) => name,
            None if row_index == 0 => return Err(ParseError::MissingSeriesName.into()),
            None => continue,
        };
        let name = disambiguate(&mut seen, name);
        series.push(SeriesMeta::new(name.clone(), rules.classify(&name)));
        named_rows.push((name, row));
    }

    let mut points: Vec<TimePoint> = date_columns
        .iter()
        .map(|(_, date)| TimePoint::new(*date))
        .collect();
    for (name, row) in &named_rows {
        for (slot, (column, _)) in date_columns.iter().enumerate() {
            if let Some(value) = row.get(*column).and_then(cell_number) {
                points[slot].absolute.insert(name.clone(), value);
            }
        }
    }

    Ok(Dataset::new(series, points))
}

/// Kept header columns: (column index, date), strictly increasing.
fn date_axis(header: &[Cell]) -> Vec<(usize, NaiveDate)> {
    let mut columns: Vec<(usize, NaiveDate)> = Vec::new();
    for (index, cell) in header.iter().enumerate().skip(1) {
        let Some(date) = cell_date(cell) else { continue };
        if let Some((_, last)) = columns.last() {
            if date <= *last {
                continue;
            }
        }
        columns.push((index, date));
    }
    columns
}

fn cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(date) => Some(*date),
        Cell::Text(text) => parse_date(text),
        _ => None,
    }
}

fn cell_text(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

fn cell_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(value) if value.is_finite() => Some(*value),
        _ => None,
    }
}

fn disambiguate(seen: &mut HashMap<String, usize>, name: String) -> String {
    let count = seen.entry(name.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        name
    } else {
        format!("{name} ({count})")
    }
}
