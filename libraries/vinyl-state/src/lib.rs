//! Vinyl Vote State
//!
//! Client-side state containers. Every piece of mutable application state
//! lives in one of two stores, and every network call goes through them:
//!
//! - [`SessionStore`] owns identity and the credential token, derives
//!   `is_authenticated` / `is_admin`, and persists the session through an
//!   injected [`vinyl_core::KeyValueStore`].
//! - [`AlbumStore`] owns the fetched album page with its cursors and search
//!   text, and derives the ranked and filtered views.
//!
//! Neither store returns errors. A failed operation reports `false`/`None`
//! and leaves a readable message in `last_error`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vinyl_client::{ClientConfig, VinylClient};
//! use vinyl_core::FileStore;
//! use vinyl_state::{AlbumStore, SessionStore};
//!
//! let storage = Arc::new(FileStore::new("vinyl-session.json"));
//! let client = Arc::new(VinylClient::new(ClientConfig::default(), storage.clone())?);
//!
//! let session = SessionStore::new(client.clone(), storage);
//! let albums = AlbumStore::new(client);
//!
//! if session.login("ada@example.com", "secret").await {
//!     albums.fetch_page(1, "").await;
//!     for album in albums.visible_items().await {
//!         println!("{:>4}  {} - {}", album.vote_score(), album.artist, album.name);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

mod albums;
mod guard;
mod session;
mod status;
pub mod views;

pub use albums::{AlbumCollection, AlbumStore};
pub use guard::{resolve, Navigation, NavigationGuard, Route, RouteAccess};
pub use session::{Session, SessionStore};
pub use status::OperationStatus;
