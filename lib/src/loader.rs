use crate::error::{ExportError, Result};
use crate::models::LinkRecord;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load every link record from a GoodLinks JSON export
///
/// Checks run in order: `.json` extension, file existence, readability,
/// JSON syntax, then the shape of each record. The first failure wins.
pub fn load_links(path: &Path) -> Result<Vec<LinkRecord>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(ExportError::UnsupportedExtension(path.to_path_buf()));
    }

    if !path.exists() {
        return Err(ExportError::InputNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ExportError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let links = parse_links(&contents)?;
    debug!("Loaded {} link(s) from {}", links.len(), path.display());
    Ok(links)
}

/// Parse export text into link records
///
/// The text must hold a JSON array. Each element is then checked on its own
/// so that a malformed record is reported by position.
pub fn parse_links(contents: &str) -> Result<Vec<LinkRecord>> {
    let values: Vec<Value> = serde_json::from_str(contents)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value)
                .map_err(|source| ExportError::InvalidRecord { index, source })
        })
        .collect()
}
