/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Root of the journal tree entries are written to
    pub journal_dir: String,
    pub songs_file: String,
    /// Whether the registry file has been created yet
    pub songs_file_exists: bool,
}

/// GET /api/health
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let songs_file = app_state.songs.path();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        journal_dir: app_state.journal.root().display().to_string(),
        songs_file: songs_file.display().to_string(),
        songs_file_exists: tokio::fs::try_exists(songs_file).await.unwrap_or(false),
    })
}
