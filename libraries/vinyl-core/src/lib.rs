//! Vinyl Vote Core
//!
//! Platform-agnostic records, error handling and durable storage shared by
//! the HTTP client, the state stores and the front ends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `User`, `AlbumPage`, `AuthSession`
//! - **Storage**: the injected `KeyValueStore` capability with in-memory and
//!   file-backed implementations
//! - **Error Handling**: `VinylError`, `Result` and the `FailureKind` taxonomy
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::{Album, KeyValueStore, MemoryStore, VoteDirection, TOKEN_KEY};
//!
//! let album = Album::new(1, "Blue Train", "John Coltrane").with_votes(5, 2);
//! assert_eq!(album.vote_score(), 3);
//! assert_eq!(VoteDirection::Up.as_str(), "upvote");
//!
//! let store = MemoryStore::new();
//! store.set(TOKEN_KEY, "abc").unwrap();
//! assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{FailureKind, Result, VinylError};
pub use storage::{FileStore, KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};

pub use types::{Album, AlbumId, AlbumPage, AuthSession, User, UserId, VoteDirection};
