//! Main Vinyl Vote API client.

use crate::albums::AlbumClient;
use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::gateway::{AlbumGateway, AuthGateway};
use crate::types::{AlbumQuery, ApiError, ClientConfig, LoginRequest, RegisterRequest};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use vinyl_core::{Album, AlbumId, AlbumPage, AuthSession, KeyValueStore, VoteDirection, TOKEN_KEY};

/// Client for the Vinyl Vote HTTP API.
///
/// The client owns no session state of its own. Whenever a request is
/// built it looks up the credential token in the same `KeyValueStore` the
/// session layer persists to, and attaches it as a bearer token.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use vinyl_client::{ClientConfig, VinylClient};
/// use vinyl_core::MemoryStore;
///
/// let client = VinylClient::new(
///     ClientConfig::new("https://votes.example.com/api"),
///     Arc::new(MemoryStore::new()),
/// )?;
///
/// let page = client.albums().list_albums(&Default::default()).await?;
/// println!("{} albums on page {}", page.data.len(), page.current_page);
/// ```
pub struct VinylClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn KeyValueStore>,
}

impl VinylClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig, credentials: Arc<dyn KeyValueStore>) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("VinylVote/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token currently held in durable storage, if any.
    ///
    /// A storage read failure is logged and treated as "no token".
    pub fn bearer_token(&self) -> Option<String> {
        match self.credentials.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read credential token");
                None
            }
        }
    }

    /// Identity operations (register, login, logout).
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url)
    }

    /// Album operations, authenticated with the stored token.
    pub fn albums(&self) -> AlbumClient<'_> {
        AlbumClient::new(&self.http, &self.base_url, self.bearer_token())
    }
}

#[async_trait]
impl AuthGateway for VinylClient {
    async fn register(&self, request: RegisterRequest) -> Result<AuthSession> {
        self.auth().register(&request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthSession> {
        self.auth().login(&request).await
    }

    async fn logout(&self, token: String) -> Result<()> {
        self.auth().logout(&token).await
    }
}

#[async_trait]
impl AlbumGateway for VinylClient {
    async fn list_albums(&self, query: AlbumQuery) -> Result<AlbumPage> {
        self.albums().list_albums(&query).await
    }

    async fn vote(&self, album_id: AlbumId, direction: VoteDirection) -> Result<Album> {
        self.albums().vote(album_id, direction).await
    }

    async fn delete_album(&self, album_id: AlbumId) -> Result<()> {
        self.albums().delete_album(album_id).await
    }
}

/// Decode a successful response body.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {} response: {}", what, e)))
}

/// Human-readable message from an error response.
///
/// Prefers the JSON `message` (then `error`) field, falls back to the raw
/// body, and finally to the status reason phrase.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    extract_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
        if let Some(message) = api_error.message.or(api_error.error) {
            if !message.trim().is_empty() {
                return Some(message);
            }
        }
    }

    Some(body.to_string())
}

/// Map a non-2xx response to the generic error variants.
pub(crate) async fn unexpected_status(response: Response) -> ClientError {
    let status = response.status().as_u16();
    match status {
        401 => ClientError::AuthRequired,
        404 => ClientError::NotFound(error_message(response).await),
        _ => ClientError::ServerError {
            status,
            message: error_message(response).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_core::MemoryStore;

    fn client_for(url: &str) -> Result<VinylClient> {
        VinylClient::new(ClientConfig::new(url), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(client_for("https://example.com").is_ok());
        assert!(client_for("http://localhost:8080/api").is_ok());

        // Invalid URLs
        assert!(client_for("").is_err());
        assert!(client_for("not-a-url").is_err());
        assert!(client_for("ftp://example.com").is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = client_for("https://example.com/api//").expect("valid url");
        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[test]
    fn test_bearer_token_reads_storage() {
        let store = Arc::new(MemoryStore::new());
        let client = VinylClient::new(ClientConfig::new("https://example.com"), store.clone())
            .expect("valid url");
        assert_eq!(client.bearer_token(), None);

        store.set(TOKEN_KEY, "tok").unwrap();
        assert_eq!(client.bearer_token().as_deref(), Some("tok"));

        store.set(TOKEN_KEY, "").unwrap();
        assert_eq!(client.bearer_token(), None);
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message":"The email has already been taken."}"#).as_deref(),
            Some("The email has already been taken.")
        );
        assert_eq!(
            extract_message(r#"{"error":"unauthorized"}"#).as_deref(),
            Some("unauthorized")
        );
        assert_eq!(
            extract_message("Internal Server Error").as_deref(),
            Some("Internal Server Error")
        );
        assert_eq!(extract_message("   "), None);
    }
}
