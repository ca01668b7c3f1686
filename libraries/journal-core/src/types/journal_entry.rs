/// Journal entry submitted from the add-entry page
use super::lenient;
use serde::{Deserialize, Serialize};

/// One production session as submitted by the UI.
///
/// An entry has no identity of its own: it is rendered once into a markdown document
/// and discarded. Optional fields are `None` when the form left them blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Track the session worked on
    pub track: String,

    /// Free-text session notes
    pub notes: String,

    /// Display date chosen in the UI
    pub date: String,

    /// Follow-up actions for the next session
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub followup: Option<String>,

    /// Tempo in beats per minute
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub bpm: Option<String>,

    /// Musical key
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub key: Option<String>,

    /// Effects or plugins used
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub effects: Option<String>,

    /// Recording or technical problems
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub issues: Option<String>,

    /// Mood or feeling of the session
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub mood: Option<String>,

    /// What inspired the session
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub inspiration: Option<String>,

    /// What was difficult
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub challenges: Option<String>,

    /// What worked well
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub breakthroughs: Option<String>,
}

/// A labelled bullet inside one of the notes sections of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteField<'a> {
    /// Bold label shown before the value
    pub label: &'static str,

    /// Supplied value, if any
    pub value: Option<&'a str>,

    /// Bracketed hint shown when the whole section was left blank
    pub placeholder: &'static str,
}

impl JournalEntry {
    /// Create an entry with only the required fields
    pub fn new(
        track: impl Into<String>,
        notes: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            track: track.into(),
            notes: notes.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Technical notes in render order
    pub fn technical_notes(&self) -> [NoteField<'_>; 4] {
        [
            NoteField {
                label: "BPM",
                value: self.bpm.as_deref(),
                placeholder: "[Add BPM if relevant]",
            },
            NoteField {
                label: "Key",
                value: self.key.as_deref(),
                placeholder: "[Add key if relevant]",
            },
            NoteField {
                label: "Effects Used",
                value: self.effects.as_deref(),
                placeholder: "[List any new effects or plugins]",
            },
            NoteField {
                label: "Recording Issues",
                value: self.issues.as_deref(),
                placeholder: "[Note any technical problems]",
            },
        ]
    }

    /// Creative notes in render order
    pub fn creative_notes(&self) -> [NoteField<'_>; 4] {
        [
            NoteField {
                label: "Mood/Feeling",
                value: self.mood.as_deref(),
                placeholder: "[Describe the creative mood]",
            },
            NoteField {
                label: "Inspiration",
                value: self.inspiration.as_deref(),
                placeholder: "[What inspired this session]",
            },
            NoteField {
                label: "Challenges",
                value: self.challenges.as_deref(),
                placeholder: "[What was difficult]",
            },
            NoteField {
                label: "Breakthroughs",
                value: self.breakthroughs.as_deref(),
                placeholder: "[What worked well]",
            },
        ]
    }
}
