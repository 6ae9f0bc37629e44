//! Series identity and categorization.

use serde::{Deserialize, Serialize};

/// Which control group a series belongs to.
///
/// Assigned once at load time. Downstream code (bulk show/hide, panel
/// grouping) only ever reads this tag; nothing re-derives it from the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesCategory {
    /// A proposed portfolio.
    Fund,
    /// A benchmark index.
    Index,
}

impl SeriesCategory {
    pub fn label(self) -> &'static str {
        match self {
            SeriesCategory::Fund => "Funds",
            SeriesCategory::Index => "Indexes",
        }
    }
}

/// One named track: a proposed portfolio or a benchmark index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub name: String,
    pub category: SeriesCategory,
}

impl SeriesMeta {
    pub fn new(name: impl Into<String>, category: SeriesCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels() {
        assert_eq!(SeriesCategory::Fund.label(), "Funds");
        assert_eq!(SeriesCategory::Index.label(), "Indexes");
    }
}
