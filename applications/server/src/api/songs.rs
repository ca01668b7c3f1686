/// Song registry API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{body::Bytes, extract::State, Json};
use journal_core::{CreateSong, Song};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CreateSongResponse {
    pub success: bool,
    pub message: String,
    pub song: Song,
}

/// GET /api/songs
/// The registry array exactly as stored
pub async fn list_songs(State(app_state): State<AppState>) -> Result<Json<Vec<Value>>> {
    let songs = app_state
        .songs
        .load_all()
        .await
        .map_err(|e| e.context("Failed to load songs"))?;
    Ok(Json(songs))
}

/// POST /api/songs
pub async fn create_song(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateSongResponse>> {
    const CONTEXT: &str = "Failed to save song";

    let form: CreateSong =
        serde_json::from_slice(&body).map_err(|e| ServerError::from(e).context(CONTEXT))?;
    let song = app_state
        .songs
        .create(form)
        .await
        .map_err(|e| e.context(CONTEXT))?;

    tracing::info!("Song saved: {} ({})", song.title, song.status);

    Ok(Json(CreateSongResponse {
        success: true,
        message: format!("Song \"{}\" added successfully", song.title),
        song,
    }))
}
