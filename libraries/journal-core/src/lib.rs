//! Production Journal Core
//!
//! Platform-agnostic types and pure logic for the production journal.
//!
//! This crate knows nothing about HTTP or the filesystem layout of a running server;
//! it turns submitted forms into the documents and records that get persisted.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `JournalEntry`, `JournalFile`, `Song`, `SongId`, `SongStatus`
//! - **Rendering**: markdown documents and dated filenames for journal entries
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use journal_core::{markdown, JournalEntry};
//!
//! let entry = JournalEntry::new("Track 01 May", "Reworked the bridge", "Dec 19, 2024");
//! let session = NaiveDate::from_ymd_opt(2024, 12, 19)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//!
//! assert_eq!(
//!     markdown::entry_filename(&entry.track, &session),
//!     "2024-12-19-1430-track-01-may.md"
//! );
//! assert!(markdown::render_entry(&entry, &session).contains("## Session Notes"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod markdown;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{CreateSong, JournalEntry, JournalFile, Song, SongId, SongStatus};
