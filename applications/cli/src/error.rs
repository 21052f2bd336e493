/// Command-line error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] vinyl_client::ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] vinyl_core::VinylError),

    /// A store operation failed; carries the store's `last_error`
    #[error("{0}")]
    Operation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub(crate) fn operation(message: Option<String>, fallback: &str) -> Self {
        CliError::Operation(message.unwrap_or_else(|| fallback.to_string()))
    }
}
