/// HTML pages and UI assets
use crate::{
    error::Result,
    services::ui_pages::{Page, UiAsset},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

impl IntoResponse for UiAsset {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// GET /
pub async fn index(State(app_state): State<AppState>) -> Result<UiAsset> {
    app_state.pages.page(Page::Index).await
}

/// GET /add-entry
pub async fn add_entry(State(app_state): State<AppState>) -> Result<UiAsset> {
    app_state.pages.page(Page::AddEntry).await
}

/// GET /read-entries
pub async fn read_entries(State(app_state): State<AppState>) -> Result<UiAsset> {
    app_state.pages.page(Page::ReadEntries).await
}

/// GET /album-overview
pub async fn album_overview(State(app_state): State<AppState>) -> Result<UiAsset> {
    app_state.pages.page(Page::AlbumOverview).await
}

/// GET /src/ui/*path
pub async fn ui_file(
    Path(path): Path<String>,
    State(app_state): State<AppState>,
) -> Result<UiAsset> {
    app_state.pages.asset(&path).await
}
