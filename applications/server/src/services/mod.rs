/// Server services
pub mod git_sync;
pub mod journal_store;
pub mod song_registry;
pub mod ui_pages;

pub use git_sync::{GitCli, GitSync, VersionControl};
pub use journal_store::JournalStore;
pub use song_registry::SongRegistry;
pub use ui_pages::UiPages;
