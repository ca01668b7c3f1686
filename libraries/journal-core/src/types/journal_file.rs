/// Journal file index record
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A markdown file found under the journal root.
///
/// Records are derived from a directory scan on every listing and are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalFile {
    /// Base name of the file
    pub filename: String,

    /// Path relative to the journal root
    pub path: String,

    /// Absolute path on disk
    pub full_path: String,

    /// Last modification time
    pub modified: DateTime<Local>,
}
