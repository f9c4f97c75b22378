use crate::destination::Destination;
use crate::error::{ExportError, Result};
use crate::models::LinkRecord;
use crate::profile::ExportProfile;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of link rows written, header excluded
    pub count: usize,
    pub path: PathBuf,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully converted {} links and saved output as '{}'.",
            self.count,
            self.path.display()
        )
    }
}

/// Write the profile's header and one row per record to `writer`
///
/// Rows keep input order and end in `\r\n`. Returns the number of rows written.
pub fn write_rows<W: Write>(
    profile: &ExportProfile,
    records: &[LinkRecord],
    writer: W,
) -> std::result::Result<usize, csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(profile.header)?;
    for record in records {
        csv_writer.write_record(profile.row(record).cells())?;
    }
    csv_writer.flush()?;

    Ok(records.len())
}

/// Path of the output file for `destination` inside `output_dir`
///
/// `.` maps to the bare filename so the file lands in the working directory.
pub fn output_path(destination: Destination, output_dir: &Path) -> PathBuf {
    if output_dir == Path::new(".") {
        PathBuf::from(destination.filename())
    } else {
        output_dir.join(destination.filename())
    }
}

/// Convert `records` for `destination`, overwriting any previous output file
pub fn export(
    destination: Destination,
    records: &[LinkRecord],
    output_dir: &Path,
) -> Result<ExportSummary> {
    let path = output_path(destination, output_dir);
    debug!("Writing {} export to {}", destination, path.display());

    let file = File::create(&path).map_err(|source| ExportError::OutputOpen {
        path: path.clone(),
        source,
    })?;

    let count = write_rows(destination.profile(), records, file).map_err(|source| {
        ExportError::OutputWrite {
            path: path.clone(),
            source,
        }
    })?;

    Ok(ExportSummary { count, path })
}
