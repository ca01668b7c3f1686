/// HTTP routing
use crate::{api, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
///
/// Unknown paths and unsupported methods on known paths both answer 404. Every
/// response allows any origin, and `OPTIONS` on any path is answered by the CORS
/// layer before routing. Request bodies are not size limited, so every POST
/// reaches its handler and fails with a JSON body.
pub fn create_router(app_state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(api::pages::index).fallback(api::not_found))
        .route(
            "/add-entry",
            get(api::pages::add_entry).fallback(api::not_found),
        )
        .route(
            "/read-entries",
            get(api::pages::read_entries).fallback(api::not_found),
        )
        .route(
            "/album-overview",
            get(api::pages::album_overview).fallback(api::not_found),
        )
        .route(
            "/src/ui/*path",
            get(api::pages::ui_file).fallback(api::not_found),
        );

    let api_routes = Router::new()
        .route("/health", get(api::health::health).fallback(api::not_found))
        .route(
            "/journal-files",
            get(api::journal::list_journal_files).fallback(api::not_found),
        )
        .route(
            "/journal-file/:filename",
            get(api::journal::get_journal_file).fallback(api::not_found),
        )
        .route(
            "/songs",
            get(api::songs::list_songs)
                .post(api::songs::create_song)
                .fallback(api::not_found),
        )
        .route(
            "/git-commit",
            get(api::git::git_commit)
                .post(api::git::git_commit)
                .fallback(api::not_found),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(pages)
        .route(
            "/save-entry",
            axum::routing::post(api::journal::save_entry).fallback(api::not_found),
        )
        .nest("/api", api_routes)
        .fallback(api::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(cors)
        .with_state(app_state)
}
