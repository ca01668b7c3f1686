/// Shared application state
use crate::{
    config::ServerConfig,
    services::{GitCli, GitSync, JournalStore, SongRegistry, UiPages},
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<JournalStore>,
    pub songs: Arc<SongRegistry>,
    pub git: Arc<GitSync>,
    pub pages: Arc<UiPages>,
}

impl AppState {
    pub fn new(
        journal: Arc<JournalStore>,
        songs: Arc<SongRegistry>,
        git: Arc<GitSync>,
        pages: Arc<UiPages>,
    ) -> Self {
        Self {
            journal,
            songs,
            git,
            pages,
        }
    }

    /// Build every service from configuration, with git driven through its CLI
    pub fn from_config(config: &ServerConfig) -> Self {
        let git_cli = GitCli::new(config.git.binary.clone(), config.git.repo_dir.clone());

        Self::new(
            Arc::new(JournalStore::new(config.storage.journal_dir.clone())),
            Arc::new(SongRegistry::new(config.storage.songs_file.clone())),
            Arc::new(GitSync::new(Arc::new(git_cli))),
            Arc::new(UiPages::new(config.ui.root.clone())),
        )
    }
}
