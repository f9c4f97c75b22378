//! Destination profiles: one generic record-to-row transform, configured per
//! import service by a header, a column order, a folder rule and a tag rule.

use crate::models::{ExportRow, LinkRecord};
use crate::normalize::{clean_url, format_timestamp};

/// Folder name given to every read link
pub const ARCHIVE_FOLDER: &str = "Archive";

/// What goes into a single CSV cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Record URL with its fragment removed
    Url,
    /// Folder chosen by the profile's `FolderPolicy`
    Folder,
    /// Tags formatted by the profile's `TagPolicy`
    Tags,
    /// `addedAt` truncated to whole seconds
    Created,
    /// Always empty (titles, selections, descriptions)
    Blank,
}

/// How a record is assigned to a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderPolicy {
    /// Read links go to Archive, otherwise the first tag, otherwise `fallback`
    ArchiveThenFirstTag { fallback: &'static str },
    /// Read links go to Archive, everything else to `fallback`
    ArchiveOr { fallback: &'static str },
}

impl FolderPolicy {
    pub fn folder_for<'a>(&self, record: &'a LinkRecord) -> &'a str {
        if record.is_read() {
            return ARCHIVE_FOLDER;
        }
        match *self {
            FolderPolicy::ArchiveThenFirstTag { fallback } => record
                .tags
                .first()
                .map(String::as_str)
                .unwrap_or(fallback),
            FolderPolicy::ArchiveOr { fallback } => fallback,
        }
    }
}

/// How the tag list is rendered into the `Tags` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPolicy {
    /// Destination has no tag column
    Omit,
    /// Join every tag with the separator
    Join(&'static str),
}

impl TagPolicy {
    pub fn format(&self, tags: &[String]) -> String {
        match *self {
            TagPolicy::Omit => String::new(),
            TagPolicy::Join(separator) => tags.join(separator),
        }
    }
}

/// Everything that distinguishes one destination's CSV layout from another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProfile {
    pub filename: &'static str,
    pub header: &'static [&'static str],
    pub columns: &'static [Column],
    pub folder: FolderPolicy,
    pub tags: TagPolicy,
}

impl ExportProfile {
    /// Build the CSV row for one record, cells in header order
    pub fn row(&self, record: &LinkRecord) -> ExportRow {
        let cells = self
            .columns
            .iter()
            .map(|column| match column {
                Column::Url => clean_url(&record.url).to_string(),
                Column::Folder => self.folder.folder_for(record).to_string(),
                Column::Tags => self.tags.format(&record.tags),
                Column::Created => format_timestamp(record.added_at),
                Column::Blank => String::new(),
            })
            .collect();
        ExportRow(cells)
    }
}

pub const INSTAPAPER: ExportProfile = ExportProfile {
    filename: "instapaper-export.csv",
    header: &["URL", "Title", "Selection", "Folder", "Timestamp"],
    columns: &[
        Column::Url,
        Column::Blank,
        Column::Blank,
        Column::Folder,
        Column::Created,
    ],
    folder: FolderPolicy::ArchiveThenFirstTag { fallback: "Unread" },
    tags: TagPolicy::Omit,
};

pub const RAINDROP: ExportProfile = ExportProfile {
    filename: "raindrop-export.csv",
    header: &["url", "folder", "title", "description", "tags", "created"],
    columns: &[
        Column::Url,
        Column::Folder,
        Column::Blank,
        Column::Blank,
        Column::Tags,
        Column::Created,
    ],
    folder: FolderPolicy::ArchiveOr { fallback: "Inbox" },
    tags: TagPolicy::Join(", "),
};
