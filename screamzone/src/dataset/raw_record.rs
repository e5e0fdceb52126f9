use serde::{Deserialize, Serialize};
use serde_json::Value;

/// one row of the point dataset before any validation. coordinates may be
/// missing and `tags` may be a mapping, the text of a mapping, or anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Value,
}

/// the CSV shape of a [`RawRecord`]. tags always arrive as text here, and
/// unparseable coordinates are read as missing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCsvRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    lon: Option<f64>,
    #[serde(default)]
    tags: Option<String>,
}

impl From<RawCsvRow> for RawRecord {
    fn from(row: RawCsvRow) -> Self {
        RawRecord {
            lat: row.lat,
            lon: row.lon,
            tags: row.tags.map(Value::String).unwrap_or(Value::Null),
        }
    }
}
