//! Load/parse failure taxonomy.
//!
//! Only resource access and sheet structure can fail. Numeric edge cases
//! never raise — invalid cells are dropped and the chart shows a gap.

use thiserror::Error;

/// The sheet decoded, but its structure is unusable.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("first data row has no series name")]
    MissingSeriesName,
    #[error("header row has no parseable dates")]
    NoDateColumns,
    #[error("workbook: {0}")]
    Workbook(String),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// The resource could not be turned into a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resource unreachable: {0}")]
    Unreachable(String),
    #[error("resource is empty")]
    Empty,
    #[error("sheet has a header but no data rows")]
    NoDataRows,
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
