//! Error types for the Vinyl Vote client.

use thiserror::Error;
use vinyl_core::FailureKind;

/// Errors that can occur when talking to the Vinyl Vote API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but the token was missing or rejected
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed (invalid credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Classify this error for callers that only keep a message.
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Request(_)
            | ClientError::ParseError(_)
            | ClientError::ServerUnreachable(_) => FailureKind::Transport,
            ClientError::ServerError { .. }
            | ClientError::AuthRequired
            | ClientError::AuthFailed(_)
            | ClientError::NotFound(_) => FailureKind::Rejected,
            ClientError::InvalidUrl(_) => FailureKind::Invalid,
        }
    }

    /// Map a send failure, separating "could not reach the server" from the rest.
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
