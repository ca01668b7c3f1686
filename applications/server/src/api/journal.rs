/// Journal API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use journal_core::{JournalEntry, JournalFile};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveEntryResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub file_path: String,
}

#[derive(Debug, Serialize)]
pub struct JournalFilesResponse {
    pub success: bool,
    pub files: Vec<JournalFile>,
}

#[derive(Debug, Serialize)]
pub struct JournalFileResponse {
    pub success: bool,
    pub content: String,
    pub filename: String,
    pub path: String,
}

/// POST /save-entry
/// Render a journal entry to markdown and write it under the dated journal tree
pub async fn save_entry(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveEntryResponse>> {
    const CONTEXT: &str = "Error saving entry";

    let entry: JournalEntry =
        serde_json::from_slice(&body).map_err(|e| ServerError::from(e).context(CONTEXT))?;
    let saved = app_state
        .journal
        .save_entry(&entry)
        .await
        .map_err(|e| e.context(CONTEXT))?;

    let file_path = saved.file_path.display().to_string();
    tracing::info!("Saved journal entry: {}", file_path);

    Ok(Json(SaveEntryResponse {
        success: true,
        message: format!("Entry saved to {}", file_path),
        filename: saved.filename,
        file_path,
    }))
}

/// GET /api/journal-files
pub async fn list_journal_files(
    State(app_state): State<AppState>,
) -> Result<Json<JournalFilesResponse>> {
    let files = app_state
        .journal
        .list_files()
        .await
        .map_err(|e| e.context("Error listing files"))?;

    Ok(Json(JournalFilesResponse {
        success: true,
        files,
    }))
}

/// GET /api/journal-file/:filename
pub async fn get_journal_file(
    Path(filename): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<JournalFileResponse>> {
    let file = app_state
        .journal
        .read_file(&filename)
        .await
        .map_err(|e| e.context("Error reading file"))?;

    Ok(Json(JournalFileResponse {
        success: true,
        content: file.content,
        filename: file.filename,
        path: file.path.display().to_string(),
    }))
}
