use std::path::PathBuf;

/// Error type for the goodlinks-export library
///
/// Every failure a conversion can hit ends up here. The binary prints the
/// `Display` text behind an `error:` prefix and exits, so each message must
/// read well as a single line on its own.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Input path does not end in `.json`
    #[error("input file must have a .json extension")]
    UnsupportedExtension(PathBuf),

    /// Input path does not exist
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input exists but could not be read
    #[error("could not open {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a JSON array
    #[error("could not parse JSON file: {0}")]
    Parse(#[from] serde_json::Error),

    /// An array element does not have the shape of a link record
    #[error("invalid link record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Destination name not recognised
    #[error("unknown destination '{0}' (expected instapaper or raindrop)")]
    UnknownDestination(String),

    /// Output file could not be created or truncated
    #[error("could not open {} for writing: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file was opened but a row could not be written
    #[error("could not write to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Configuration file errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExportError {
    /// Errors caused by how the tool was invoked rather than by file contents or I/O
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ExportError::UnsupportedExtension(_)
                | ExportError::InputNotFound(_)
                | ExportError::UnknownDestination(_)
        )
    }
}

/// Result type alias using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
