//! Error types for studytube.

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum StudyTubeError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A key-value storage operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
