//! Data source resolution — local paths and http(s) URLs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::CategoryRules;
use crate::domain::Dataset;

use super::error::LoadError;
use super::{csv, workbook};

/// Where the spreadsheet lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Source::Url(input.to_string())
        } else {
            Source::Path(PathBuf::from(input))
        }
    }

    /// Fetch the raw bytes. Zero bytes count as unusable.
    pub fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let bytes = match self {
            Source::Path(path) => std::fs::read(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?,
            Source::Url(url) => fetch_url(url)?,
        };
        if bytes.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(bytes)
    }

    /// Fetch and decode, format chosen by file extension.
    pub fn load(&self, rules: &CategoryRules) -> Result<Dataset, LoadError> {
        let bytes = self.fetch()?;
        if self.is_workbook() {
            workbook::load_bytes(bytes, rules)
        } else {
            csv::load_bytes(bytes, rules)
        }
    }

    fn is_workbook(&self) -> bool {
        matches!(
            self.extension().as_deref(),
            Some("xlsx") | Some("xlsm") | Some("xls")
        )
    }

    /// File-name extension, lowercased; query and fragment stripped for URLs.
    fn extension(&self) -> Option<String> {
        let path = match self {
            Source::Path(path) => path.as_path(),
            Source::Url(url) => Path::new(url.split(['?', '#']).next().unwrap_or(url)),
        };
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{url}"),
        }
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| LoadError::Unreachable(format!("{url}: {e}")))?;
    if !response.status().is_success() {
        return Err(LoadError::Unreachable(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .map_err(|e| LoadError::Unreachable(format!("{url}: {e}")))?;
    Ok(bytes.to_vec())
}
