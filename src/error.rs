//! Error types for meltemi

use thiserror::Error;

/// Main error type for meltemi operations
///
/// "Not found" conditions (an unresolvable port name, an empty ring) are
/// represented as `None`/empty collections by the planning code, never as
/// errors. Only structurally invalid input reaches this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid plan request: {0}")]
    InvalidRequest(String),

    #[error("Unresolved port name: {0}")]
    UnresolvedPort(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Share link error: {0}")]
    ShareLink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for meltemi operations
pub type Result<T> = std::result::Result<T, Error>;
