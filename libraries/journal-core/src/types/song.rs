/// Song registry domain types
use super::{ids::SongId, lenient};
use crate::error::{CoreError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Production stage of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongStatus {
    /// Idea or sketch
    Draft,
    /// Arrangement and recording
    Production,
    /// Mixing
    Mixing,
    /// Mastering
    Mastering,
    /// Finished
    Done,
}

impl SongStatus {
    /// Parse a status label as stored in the registry
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "draft" => Some(SongStatus::Draft),
            "production" => Some(SongStatus::Production),
            "mixing" => Some(SongStatus::Mixing),
            "mastering" => Some(SongStatus::Mastering),
            "done" => Some(SongStatus::Done),
            _ => None,
        }
    }

    /// Label used in the registry file
    pub fn label(&self) -> &'static str {
        match self {
            SongStatus::Draft => "draft",
            SongStatus::Production => "production",
            SongStatus::Mixing => "mixing",
            SongStatus::Mastering => "mastering",
            SongStatus::Done => "done",
        }
    }

    /// Percentage complete assumed for a song entering this stage
    pub fn default_progress(&self) -> u8 {
        match self {
            SongStatus::Draft => 10,
            SongStatus::Production => 30,
            SongStatus::Mixing => 70,
            SongStatus::Mastering => 90,
            SongStatus::Done => 100,
        }
    }
}

/// Progress percentage for a free-text status label; unknown labels map to 0
pub fn progress_for_status(label: &str) -> u8 {
    SongStatus::from_label(label).map_or(0, |status| status.default_progress())
}

/// A song tracked in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier, assigned once at creation
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Musical key
    pub key: String,

    /// Tempo in beats per minute
    pub bpm: Option<u32>,

    /// Status label; only the labels of [`SongStatus`] carry meaning
    pub status: String,

    /// Free-form notes
    pub notes: String,

    /// Percentage complete, derived from the status at creation time
    pub progress: u8,

    /// Creation timestamp
    pub created_at: DateTime<Local>,

    /// Last update timestamp
    pub updated_at: DateTime<Local>,
}

/// Song form submitted from the album overview page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateSong {
    /// Song title
    #[serde(rename = "songTitle", default)]
    pub title: Option<String>,

    /// Musical key
    #[serde(rename = "songKey", default)]
    pub key: Option<String>,

    /// Tempo, as typed into the form; fractional numbers are truncated
    #[serde(
        rename = "songBpm",
        default,
        deserialize_with = "lenient::optional_integer_text"
    )]
    pub bpm: Option<String>,

    /// Status label
    #[serde(rename = "songStatus", default)]
    pub status: Option<String>,

    /// Free-form notes
    #[serde(rename = "songNotes", default)]
    pub notes: Option<String>,
}

impl CreateSong {
    /// Build the registry record for this form.
    ///
    /// A missing status means `draft`. Progress is looked up from the status once and
    /// stored; it is not tied to later status changes.
    pub fn into_song(self, id: SongId, now: DateTime<Local>) -> Result<Song> {
        let bpm = self.bpm.as_deref().map(parse_bpm).transpose()?;
        let status = self
            .status
            .unwrap_or_else(|| SongStatus::Draft.label().to_string());
        let progress = progress_for_status(&status);

        Ok(Song {
            id,
            title: self.title.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            bpm,
            status,
            notes: self.notes.unwrap_or_default(),
            progress,
            created_at: now,
            updated_at: now,
        })
    }
}

fn parse_bpm(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::invalid_input(format!("BPM must be a whole number, got {raw:?}")))
}
