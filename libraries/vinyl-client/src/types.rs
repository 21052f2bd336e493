//! Types for Vinyl Vote API requests and responses.

use serde::{Deserialize, Serialize};
use vinyl_core::{Album, VoteDirection};

/// Configuration for connecting to a Vinyl Vote server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://votes.example.com/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Request body for the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// =============================================================================
// Album Types
// =============================================================================

/// Parameters for one page of the album listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumQuery {
    /// 1-based page number
    pub page: u32,
    /// Filter text; empty means no filter
    pub search: String,
}

impl AlbumQuery {
    pub fn new(page: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            search: search.into(),
        }
    }
}

impl Default for AlbumQuery {
    fn default() -> Self {
        Self::new(1, "")
    }
}

/// Request body for the vote endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct VoteRequest {
    pub value: VoteDirection,
}

/// Vote responses arrive wrapped in `{"data": ...}`; a bare record is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AlbumEnvelope {
    Wrapped { data: Album },
    Bare(Album),
}

impl AlbumEnvelope {
    pub fn into_album(self) -> Album {
        match self {
            AlbumEnvelope::Wrapped { data } | AlbumEnvelope::Bare(data) => data,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// API error body returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    pub message: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_wrapped_and_bare() {
        let wrapped: AlbumEnvelope = serde_json::from_value(serde_json::json!({
            "data": {"id": 1, "name": "A", "artist": "X", "upvotes": 5, "downvotes": 1}
        }))
        .unwrap();
        assert_eq!(wrapped.into_album().upvotes, 5);

        let bare: AlbumEnvelope = serde_json::from_value(serde_json::json!(
            {"id": 2, "name": "B", "artist": "Y", "upvotes": 0, "downvotes": 3}
        ))
        .unwrap();
        assert_eq!(bare.into_album().id, 2);
    }

    #[test]
    fn test_vote_request_body() {
        let body = serde_json::to_value(VoteRequest {
            value: VoteDirection::Down,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"value": "downvote"}));
    }

    #[test]
    fn test_config_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout_secs, 30);
    }
}
