//! Vinyl Vote Client
//!
//! HTTP client library for the Vinyl Vote album catalog API.
//!
//! # Features
//!
//! - **Authentication**: Register, login with email/password, logout
//! - **Albums**: Paginated listing with search, voting, deletion
//! - **Gateways**: `AuthGateway` / `AlbumGateway` traits the state layer
//!   depends on, implemented by `VinylClient`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vinyl_client::{AlbumQuery, ClientConfig, LoginRequest, VinylClient};
//! use vinyl_core::FileStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = Arc::new(FileStore::new("vinyl-session.json"));
//!     let client = VinylClient::new(ClientConfig::new("https://votes.example.com/api"), storage)?;
//!
//!     let session = client.auth().login(&LoginRequest::new("ada@example.com", "secret")).await?;
//!     println!("Logged in as {}", session.user.name);
//!
//!     let page = client.albums().list_albums(&AlbumQuery::new(1, "jazz")).await?;
//!     println!("Found {} albums", page.data.len());
//!
//!     Ok(())
//! }
//! ```

mod albums;
mod auth;
mod client;
mod error;
mod gateway;
mod types;

// Re-export main types
pub use client::VinylClient;
pub use error::{ClientError, Result};
pub use gateway::{AlbumGateway, AuthGateway};
pub use types::{AlbumQuery, ClientConfig, LoginRequest, RegisterRequest};

// Re-export sub-clients for direct use if needed
pub use albums::AlbumClient;
pub use auth::AuthClient;
