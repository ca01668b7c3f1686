//! Production Journal Server Library
//!
//! Local HTTP server that writes production journal entries as markdown, keeps a JSON
//! song registry, and commits the docs folder to git on request.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{GitCli, GitSync, JournalStore, SongRegistry, UiPages, VersionControl};
pub use state::AppState;
