/// Core error types for the production journal
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for the production journal
#[derive(Error, Debug)]
pub enum CoreError {
    /// A submitted form carried a value that cannot be stored
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The song registry file does not hold a JSON array
    #[error("Song registry is malformed: {0}")]
    MalformedRegistry(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a malformed registry error
    pub fn malformed_registry(msg: impl Into<String>) -> Self {
        Self::MalformedRegistry(msg.into())
    }
}
