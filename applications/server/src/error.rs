/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git error: {0}")]
    Git(String),

    #[error(transparent)]
    Core(#[from] journal_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A failure annotated with the operation that was being performed
    #[error("{context}: {source}")]
    Operation {
        context: &'static str,
        #[source]
        source: Box<ServerError>,
    },
}

impl ServerError {
    /// Prefix the error with the operation it interrupted
    pub fn context(self, context: &'static str) -> Self {
        ServerError::Operation {
            context,
            source: Box::new(self),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Operation { source, .. } => source.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::debug!("{}", message);
        }

        // The UI reads `success` and `message` from every failed call
        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
