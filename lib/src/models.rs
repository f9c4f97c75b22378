use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One saved link from a GoodLinks JSON export
///
/// Only the fields the converters read are kept; anything else in the export
/// (`starred`, `summary`, `highlights`, ...) is ignored during deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LinkRecord {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    pub tags: Vec<String>,
    #[serde(rename = "addedAt")]
    pub added_at: f64,
    /// Raw `readAt` value. A present key always deserializes to `Some`, even
    /// when its value is `null`; only a missing key gives `None`.
    #[serde(rename = "readAt", default, deserialize_with = "present")]
    pub read_at: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl LinkRecord {
    /// Create an unread record with the given tags
    pub fn new(url: impl Into<String>, tags: Vec<String>, added_at: f64) -> Self {
        Self {
            url: url.into(),
            title: None,
            tags,
            added_at,
            read_at: None,
        }
    }

    /// Mark the record as read at the given timestamp
    pub fn with_read_at(mut self, read_at: f64) -> Self {
        self.read_at = Some(Value::from(read_at));
        self
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

/// A single formatted CSV line for one destination, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow(pub Vec<String>);

impl ExportRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}
