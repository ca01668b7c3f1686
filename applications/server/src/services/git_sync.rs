/// Git sync service - stage, commit and push the docs working tree
use crate::error::{Result, ServerError};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

/// Captured result of one version-control invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// The version-control capabilities the sync needs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Machine-readable working tree status; empty stdout means clean
    async fn status(&self) -> Result<CommandOutput>;

    /// Stage every change in the working tree
    async fn stage_all(&self) -> Result<CommandOutput>;

    async fn commit(&self, message: &str) -> Result<CommandOutput>;

    async fn push(&self) -> Result<CommandOutput>;
}

/// `VersionControl` backed by the git command line
#[derive(Debug, Clone)]
pub struct GitCli {
    binary: PathBuf,
    repo_dir: PathBuf,
}

impl GitCli {
    pub fn new(binary: PathBuf, repo_dir: PathBuf) -> Self {
        Self { binary, repo_dir }
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.repo_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                ServerError::Git(format!("failed to run {}: {}", self.binary.display(), e))
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn status(&self) -> Result<CommandOutput> {
        self.run(&["status", "--porcelain"]).await
    }

    async fn stage_all(&self) -> Result<CommandOutput> {
        self.run(&["add", "."]).await
    }

    async fn commit(&self, message: &str) -> Result<CommandOutput> {
        self.run(&["commit", "-m", message]).await
    }

    async fn push(&self) -> Result<CommandOutput> {
        self.run(&["push"]).await
    }
}

/// Outcome reported to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    pub output: String,
}

impl SyncReport {
    fn new(success: bool, message: &str, output: impl Into<String>) -> Self {
        Self {
            success,
            message: message.to_string(),
            output: output.into(),
        }
    }
}

pub struct GitSync {
    vcs: Arc<dyn VersionControl>,
}

impl GitSync {
    pub fn new(vcs: Arc<dyn VersionControl>) -> Self {
        Self { vcs }
    }

    /// Commit message for a sync run at `now`
    pub fn commit_message(now: &NaiveDateTime) -> String {
        format!(
            "Auto-commit: Production journal updates - {}",
            now.format("%Y-%m-%d %H:%M:%S")
        )
    }

    pub async fn commit_and_push(&self) -> Result<SyncReport> {
        self.commit_and_push_at(Local::now().naive_local()).await
    }

    /// Stage, commit and push.
    ///
    /// A failed push after a successful commit still reports success: the commit is
    /// kept locally and the push error is returned in `output`.
    pub async fn commit_and_push_at(&self, now: NaiveDateTime) -> Result<SyncReport> {
        let status = self.vcs.status().await?;
        if !status.success {
            return Ok(SyncReport::new(
                false,
                "Failed to check repository status",
                status.stderr,
            ));
        }
        if status.stdout.trim().is_empty() {
            return Ok(SyncReport::new(
                true,
                "No changes to commit",
                "Working directory is clean",
            ));
        }

        let staged = self.vcs.stage_all().await?;
        if !staged.success {
            tracing::warn!("Staging changes failed: {}", staged.stderr.trim());
        }

        let commit_message = Self::commit_message(&now);
        let commit = self.vcs.commit(&commit_message).await?;
        if !commit.success {
            let output = if commit.stderr.trim().is_empty() {
                commit.stdout
            } else {
                commit.stderr
            };
            return Ok(SyncReport::new(false, "Failed to commit changes", output));
        }

        let push = self.vcs.push().await?;
        let report = if push.success {
            SyncReport::new(
                true,
                "Changes committed and pushed successfully",
                format!("Commit: {}\nPush: {}", commit_message, push.stdout),
            )
        } else {
            SyncReport::new(
                true,
                "Changes committed but push failed",
                format!("Commit: {}\nPush Error: {}", commit_message, push.stderr),
            )
        };

        Ok(report)
    }
}
