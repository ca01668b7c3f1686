//! Markdown rendering and file naming for journal entries

use crate::types::{JournalEntry, NoteField};
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Lower-case a track name and turn spaces, colons and underscores into hyphens
pub fn slugify(track: &str) -> String {
    track
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | ':' | '_' => '-',
            other => other,
        })
        .collect()
}

/// File name for an entry written at `session`: `YYYY-MM-DD-HHMM-<slug>.md`.
///
/// Two entries for the same track within the same minute share a name.
pub fn entry_filename(track: &str, session: &NaiveDateTime) -> String {
    format!("{}-{}.md", session.format("%Y-%m-%d-%H%M"), slugify(track))
}

/// Directory, relative to the journal root, that holds entries written at `session`
pub fn entry_directory(session: &NaiveDateTime) -> PathBuf {
    PathBuf::from(session.format("%Y").to_string()).join(session.format("%m").to_string())
}

/// Render the markdown document for an entry.
///
/// The technical and creative sections are always present. Each one lists only the
/// supplied fields, or all four placeholder bullets when none of its fields was supplied.
pub fn render_entry(entry: &JournalEntry, session: &NaiveDateTime) -> String {
    let mut doc = String::new();

    doc.push_str("# Production Journal Entry\n\n");
    doc.push_str(&format!("**Date:** {}  \n", entry.date));
    doc.push_str(&format!("**Track:** {}  \n", entry.track));
    doc.push_str(&format!(
        "**Session Time:** {}\n\n",
        session.format("%Y-%m-%d %H:%M:%S")
    ));

    doc.push_str(&format!("## Session Notes\n{}\n\n", entry.notes));

    if let Some(followup) = &entry.followup {
        doc.push_str(&format!("## Follow-up Actions\n{followup}\n\n"));
    }

    doc.push_str(&render_section("Technical Notes", &entry.technical_notes()));
    doc.push_str("\n\n");
    doc.push_str(&render_section("Creative Notes", &entry.creative_notes()));
    doc.push_str("\n\n---\n*Auto-generated by Production Journal Server*\n");

    doc
}

fn render_section(title: &str, fields: &[NoteField<'_>]) -> String {
    let mut section = format!("## {title}\n");
    let any_supplied = fields.iter().any(|field| field.value.is_some());

    for field in fields {
        match field.value {
            Some(value) => section.push_str(&format!("- **{}:** {}\n", field.label, value)),
            None if !any_supplied => {
                section.push_str(&format!("- **{}:** {}\n", field.label, field.placeholder));
            }
            None => {}
        }
    }

    section
}
