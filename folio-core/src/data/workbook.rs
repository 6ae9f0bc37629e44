//! Binary workbook (.xlsx) decoding via calamine. First sheet only.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::config::CategoryRules;
use crate::domain::Dataset;

use super::error::{LoadError, ParseError};
use super::sheet::{self, Cell, Grid};

/// Decode workbook bytes into a dataset.
pub fn load_bytes(bytes: Vec<u8>, rules: &CategoryRules) -> Result<Dataset, LoadError> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| ParseError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::Empty)?
        .map_err(|e| ParseError::Workbook(e.to_string()))?;
    if range.is_empty() {
        return Err(LoadError::Empty);
    }

    let grid: Grid = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    sheet::build_dataset(grid, rules)
}

/// Map a calamine cell onto the shared grid cell. Anything that is neither
/// text, number, nor date becomes `Empty` and is dropped downstream.
fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::String(text) => Cell::Text(text.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Cell::Date(ndt.date()),
            None => Cell::Empty,
        },
        Data::DateTimeIso(text) => sheet::parse_date(text.get(..10).unwrap_or(text))
            .map(Cell::Date)
            .unwrap_or(Cell::Empty),
        Data::Bool(_) | Data::DurationIso(_) | Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_text_convert() {
        assert_eq!(convert_cell(&Data::Float(1.5)), Cell::Number(1.5));
        assert_eq!(convert_cell(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(
            convert_cell(&Data::String("Growth".into())),
            Cell::Text("Growth".into())
        );
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Empty);
    }

    #[test]
    fn iso_datetime_keeps_the_date_part() {
        let cell = convert_cell(&Data::DateTimeIso("2023-01-04T00:00:00".into()));
        match cell {
            Cell::Date(date) => assert_eq!(date.to_string(), "2023-01-04"),
            other => panic!("expected date, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = load_bytes(vec![0, 1, 2, 3], &CategoryRules::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::Workbook(_))));
    }
}
