/// ID types for journal entities
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Highest millisecond value handed out as a song id by this process
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Song identifier.
///
/// Generated ids are the creation time in milliseconds since the Unix epoch, bumped
/// forward when needed so that every id issued by the process is strictly greater
/// than the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    /// Create a song ID from an existing value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new time-derived song ID
    pub fn generate() -> Self {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        Self(next_after(now).to_string())
    }

    /// Generate a new song ID that sorts after every numeric id in `existing`.
    ///
    /// Ids already present in the registry may come from an earlier run with a clock
    /// that was ahead of the current one; they are never handed out again.
    pub fn generate_after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        if let Some(highest) = existing
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
        {
            LAST_ISSUED.fetch_max(highest, Ordering::SeqCst);
        }
        Self::generate()
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn next_after(now: u64) -> u64 {
    let mut last = LAST_ISSUED.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(last.saturating_add(1));
        match LAST_ISSUED.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate,
            Err(current) => last = current,
        }
    }
}
