use crate::error::{ExportError, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `config.yml`
///
/// Every key is optional; a missing key keeps the default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the CSV export is written into
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Parse a configuration file; any failure is an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)))?;

        // Empty or comment-only files hold no YAML document at all
        let has_document = contents
            .lines()
            .map(str::trim)
            .any(|l| !l.is_empty() && !l.starts_with('#'));
        if !has_document {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `config.yml` from the user's config directory
    ///
    /// A missing file is normal; a broken one is logged and ignored.
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_path();
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Self::default();
        }

        Self::load_from_path(&config_path).unwrap_or_else(|e| {
            warn!("{}; using defaults", e);
            Self::default()
        })
    }
}
