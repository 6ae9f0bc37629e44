//! Optional TOML configuration — data source, category rules, view defaults.
//!
//! A `folio.toml` next to the working directory is picked up automatically;
//! every field has a default so an empty or absent file is fine.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{SeriesCategory, ValueMode};

pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Path or URL of the spreadsheet. `None` falls back to the synthetic
    /// demo dataset.
    pub source: Option<String>,
    pub categories: CategoryRules,
    pub view: ViewDefaults,
}

impl FolioConfig {
    /// Strict load — the file must exist and parse.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    /// `folio.toml` in `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// How series get their category tag at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRules {
    /// Exact-name overrides, checked first.
    pub overrides: BTreeMap<String, SeriesCategory>,
    /// A name containing any of these markers is a fund; everything else is
    /// an index.
    pub fund_markers: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::new(),
            fund_markers: vec!["Portfolio".into(), "Fondos".into(), "Cartera".into()],
        }
    }
}

impl CategoryRules {
    /// Tag a series name. Called once per series while loading; the result
    /// is stored on `SeriesMeta` and never re-derived.
    pub fn classify(&self, name: &str) -> SeriesCategory {
        if let Some(category) = self.overrides.get(name) {
            return *category;
        }
        if self
            .fund_markers
            .iter()
            .any(|marker| name.contains(marker.as_str()))
        {
            SeriesCategory::Fund
        } else {
            SeriesCategory::Index
        }
    }
}

/// Initial view options applied when a dataset is installed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDefaults {
    /// Trailing window in samples; 1 means no smoothing.
    pub smoothing: usize,
    pub mode: ValueMode,
    pub show_grid: bool,
    pub show_baseline: bool,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            smoothing: 1,
            mode: ValueMode::Absolute,
            show_grid: true,
            show_baseline: true,
        }
    }
}
