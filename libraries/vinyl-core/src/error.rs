/// Core error types for Vinyl Vote
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `VinylError`
pub type Result<T> = std::result::Result<T, VinylError>;

/// Core error type for Vinyl Vote
#[derive(Error, Debug)]
pub enum VinylError {
    /// Durable storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl VinylError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Coarse classification of a failed operation.
///
/// Stores keep this next to the human-readable message so callers can tell a
/// dropped connection from a server-side rejection without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The remote call could not complete (connection, timeout, malformed body)
    Transport,
    /// The server answered with a well-formed error (bad credentials, not found, validation)
    Rejected,
    /// The operation was refused locally before any network call
    Invalid,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureKind::Transport => "transport",
            FailureKind::Rejected => "rejected",
            FailureKind::Invalid => "invalid",
        };
        f.write_str(label)
    }
}
