/// Song registry - a single JSON array file of song records
use crate::error::Result;
use chrono::Local;
use journal_core::{CoreError, CreateSong, Song, SongId};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Reads and appends to the registry file.
///
/// Every create is a whole-file read-modify-write with no lock, so two racing creates
/// can lose one record. The rewrite goes through a rename, so the file on disk is
/// always a complete array.
#[derive(Debug, Clone)]
pub struct SongRegistry {
    path: PathBuf,
}

impl SongRegistry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record as stored; a missing file is an empty registry
    pub async fn load_all(&self) -> Result<Vec<Value>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let songs = serde_json::from_slice::<Vec<Value>>(&bytes)
            .map_err(|e| CoreError::malformed_registry(e.to_string()))?;
        Ok(songs)
    }

    /// Append a new song built from the submitted form
    pub async fn create(&self, form: CreateSong) -> Result<Song> {
        let mut songs = self.load_all().await?;

        let id = SongId::generate_after(
            songs
                .iter()
                .filter_map(|song| song.get("id").and_then(Value::as_str)),
        );
        let song = form.into_song(id, Local::now())?;

        songs.push(serde_json::to_value(&song)?);
        self.write_all(&songs).await?;

        Ok(song)
    }

    async fn write_all(&self, songs: &[Value]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_string_pretty(songs)?;

        // Write beside the registry and rename over it
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "songs.json".to_string());
        let temp_path = self
            .path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        fs::write(&temp_path, body).await?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }
}
