//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use journal_server::{
    services::{git_sync::CommandOutput, GitSync, JournalStore, SongRegistry, UiPages},
    state::AppState,
    VersionControl,
};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Version control double that records which operations were invoked
#[derive(Default)]
pub struct RecordingVcs {
    pub status_stdout: String,
    pub push_fails: bool,
    pub calls: Mutex<Vec<&'static str>>,
}

impl RecordingVcs {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn dirty() -> Self {
        Self {
            status_stdout: "?? docs/journal/\n".to_string(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

#[async_trait]
impl VersionControl for RecordingVcs {
    async fn status(&self) -> journal_server::Result<CommandOutput> {
        self.record("status");
        Ok(ok(&self.status_stdout))
    }

    async fn stage_all(&self) -> journal_server::Result<CommandOutput> {
        self.record("stage_all");
        Ok(ok(""))
    }

    async fn commit(&self, _message: &str) -> journal_server::Result<CommandOutput> {
        self.record("commit");
        Ok(ok("1 file changed"))
    }

    async fn push(&self) -> journal_server::Result<CommandOutput> {
        self.record("push");
        if self.push_fails {
            Ok(CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: "fatal: unable to access remote".to_string(),
            })
        } else {
            Ok(ok("pushed"))
        }
    }
}

/// Application state rooted in a fresh temporary directory.
///
/// Layout mirrors a project checkout: `docs/journal`, `docs/songs.json`, and the UI
/// files at the root.
pub fn create_test_state(vcs: Arc<RecordingVcs>) -> (AppState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let state = AppState::new(
        Arc::new(JournalStore::new(root.join("docs").join("journal"))),
        Arc::new(SongRegistry::new(root.join("docs").join("songs.json"))),
        Arc::new(GitSync::new(vcs)),
        Arc::new(UiPages::new(root.to_path_buf())),
    );

    (state, temp_dir)
}
