//! Shared fixtures for the state store tests.

use async_trait::async_trait;
use mockall::mock;
use std::sync::Once;
use vinyl_client::{AlbumGateway, AlbumQuery, AuthGateway, LoginRequest, RegisterRequest};
use vinyl_core::{Album, AlbumId, AlbumPage, AuthSession, User, VoteDirection};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

mock! {
    pub AuthApi {}

    #[async_trait]
    impl AuthGateway for AuthApi {
        async fn register(&self, request: RegisterRequest) -> vinyl_client::Result<AuthSession>;
        async fn login(&self, request: LoginRequest) -> vinyl_client::Result<AuthSession>;
        async fn logout(&self, token: String) -> vinyl_client::Result<()>;
    }
}

mock! {
    pub AlbumApi {}

    #[async_trait]
    impl AlbumGateway for AlbumApi {
        async fn list_albums(&self, query: AlbumQuery) -> vinyl_client::Result<AlbumPage>;
        async fn vote(&self, album_id: AlbumId, direction: VoteDirection) -> vinyl_client::Result<Album>;
        async fn delete_album(&self, album_id: AlbumId) -> vinyl_client::Result<()>;
    }
}

pub fn user(id: i64, role: &str) -> User {
    User {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        role: role.to_string(),
    }
}

pub fn auth_session(token: &str, user: User) -> AuthSession {
    AuthSession {
        token: token.to_string(),
        user,
    }
}

pub fn album(id: AlbumId, name: &str, upvotes: i64, downvotes: i64) -> Album {
    Album::new(id, name, format!("Artist {}", id)).with_votes(upvotes, downvotes)
}

pub fn page(data: Vec<Album>, current_page: u32, last_page: u32) -> AlbumPage {
    AlbumPage {
        data,
        current_page,
        last_page,
    }
}

pub fn ids(albums: &[Album]) -> Vec<AlbumId> {
    albums.iter().map(|a| a.id).collect()
}
