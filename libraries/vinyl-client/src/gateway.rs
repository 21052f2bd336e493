//! Remote gateway traits.
//!
//! The state stores depend on these rather than on `VinylClient`, so tests
//! can substitute doubles and front ends can swap transports.

use crate::error::Result;
use crate::types::{AlbumQuery, LoginRequest, RegisterRequest};
use async_trait::async_trait;
use vinyl_core::{Album, AlbumId, AlbumPage, AuthSession, VoteDirection};

/// Identity operations, one request/response cycle each.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create an account; a successful registration also logs in.
    async fn register(&self, request: RegisterRequest) -> Result<AuthSession>;

    /// Exchange credentials for a token and identity.
    async fn login(&self, request: LoginRequest) -> Result<AuthSession>;

    /// Invalidate `token` remotely.
    async fn logout(&self, token: String) -> Result<()>;
}

/// Album operations, one request/response cycle each.
#[async_trait]
pub trait AlbumGateway: Send + Sync {
    /// Fetch one page of albums.
    async fn list_albums(&self, query: AlbumQuery) -> Result<AlbumPage>;

    /// Cast a vote; returns the authoritative album record.
    async fn vote(&self, album_id: AlbumId, direction: VoteDirection) -> Result<Album>;

    /// Delete an album.
    async fn delete_album(&self, album_id: AlbumId) -> Result<()>;
}
