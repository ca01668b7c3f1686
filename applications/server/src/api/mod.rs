/// API route modules
pub mod git;
pub mod health;
pub mod journal;
pub mod pages;
pub mod songs;

use crate::error::ServerError;

/// Fallback for unmatched paths and methods
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Not Found".to_string())
}
