/// Git sync API routes
use crate::{error::Result, services::git_sync::SyncReport, state::AppState};
use axum::{extract::State, Json};

/// GET|POST /api/git-commit
/// Commit the working tree and push it; blocks until git finishes
pub async fn git_commit(State(app_state): State<AppState>) -> Result<Json<SyncReport>> {
    let report = app_state
        .git
        .commit_and_push()
        .await
        .map_err(|e| e.context("Git operation failed"))?;

    tracing::info!("Git operation: {}", report.message);
    Ok(Json(report))
}
