use crate::app::FinderCliError;
use std::{fmt::Display, path::Path};

/// file layouts accepted as a point dataset, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// header row with `lat`, `lon` and `tags` columns
    Csv,
    /// one JSON object per line
    JsonLines,
    /// a single JSON array of objects
    JsonArray,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Result<DatasetFormat, FinderCliError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => Ok(DatasetFormat::Csv),
            Some("jsonl") | Some("ndjson") => Ok(DatasetFormat::JsonLines),
            Some("json") => Ok(DatasetFormat::JsonArray),
            _ => Err(FinderCliError::ConfigurationError(format!(
                "unsupported dataset file type: {}",
                path.display()
            ))),
        }
    }
}

impl Display for DatasetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetFormat::Csv => write!(f, "csv"),
            DatasetFormat::JsonLines => write!(f, "json lines"),
            DatasetFormat::JsonArray => write!(f, "json array"),
        }
    }
}
