/// Journal store - markdown entries under a dated directory tree
use crate::error::{Result, ServerError};
use chrono::{DateTime, Local, NaiveDateTime};
use journal_core::{markdown, JournalEntry, JournalFile};
use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};
use tokio::fs;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct JournalStore {
    root: PathBuf,
}

/// Location of a freshly written entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub filename: String,
    pub file_path: PathBuf,
}

/// Raw content of a journal file found by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalFileContent {
    pub filename: String,
    pub path: PathBuf,
    pub content: String,
}

impl JournalStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an entry stamped with the current local time
    pub async fn save_entry(&self, entry: &JournalEntry) -> Result<SavedEntry> {
        self.save_entry_at(entry, Local::now().naive_local()).await
    }

    /// Write an entry to `<root>/<YYYY>/<MM>/`, replacing any file with the same name
    pub async fn save_entry_at(
        &self,
        entry: &JournalEntry,
        session: NaiveDateTime,
    ) -> Result<SavedEntry> {
        let dir = self.root.join(markdown::entry_directory(&session));
        fs::create_dir_all(&dir).await?;

        let filename = markdown::entry_filename(&entry.track, &session);
        let file_path = dir.join(&filename);
        fs::write(&file_path, markdown::render_entry(entry, &session)).await?;

        Ok(SavedEntry {
            filename,
            file_path,
        })
    }

    /// List every markdown file under the root, newest first.
    ///
    /// A missing root is an empty journal.
    pub async fn list_files(&self) -> Result<Vec<JournalFile>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || scan_markdown_files(&root))
            .await
            .map_err(|e| ServerError::Internal(format!("Journal scan failed: {}", e)))?
    }

    /// Read the first file under the root whose base name is exactly `filename`
    pub async fn read_file(&self, filename: &str) -> Result<JournalFileContent> {
        let root = self.root.clone();
        let name = filename.to_string();
        let found = tokio::task::spawn_blocking(move || find_by_name(&root, &name))
            .await
            .map_err(|e| ServerError::Internal(format!("Journal scan failed: {}", e)))?;

        let path = found.ok_or_else(|| ServerError::NotFound("File not found".to_string()))?;
        let content = fs::read_to_string(&path).await?;

        Ok(JournalFileContent {
            filename: filename.to_string(),
            path,
            content,
        })
    }
}

fn walk(root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
}

fn scan_markdown_files(root: &Path) -> Result<Vec<JournalFile>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let absolute_root = root.canonicalize()?;

    let mut found: Vec<(SystemTime, PathBuf)> = walk(root)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .filter_map(|e| {
            let modified = e.metadata().ok()?.modified().ok()?;
            Some((modified, e.into_path()))
        })
        .collect();

    found.sort_by(|a, b| b.0.cmp(&a.0));

    let files = found
        .into_iter()
        .filter_map(|(modified, path)| {
            let relative = path.strip_prefix(root).ok()?;
            Some(JournalFile {
                filename: path.file_name()?.to_string_lossy().into_owned(),
                path: relative.to_string_lossy().into_owned(),
                full_path: absolute_root.join(relative).to_string_lossy().into_owned(),
                modified: DateTime::<Local>::from(modified),
            })
        })
        .collect();

    Ok(files)
}

fn find_by_name(root: &Path, filename: &str) -> Option<PathBuf> {
    walk(root)
        .find(|e| e.file_name().to_str() == Some(filename))
        .map(|e| e.into_path())
}
