mod ids;
mod journal_entry;
mod journal_file;
mod lenient;
mod song;

pub use ids::SongId;
pub use journal_entry::{JournalEntry, NoteField};
pub use journal_file::JournalFile;
pub use song::{progress_for_status, CreateSong, Song, SongStatus};
