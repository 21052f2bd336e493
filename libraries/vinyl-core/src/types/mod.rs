//! Domain types for Vinyl Vote

mod album;
mod user;

pub use album::{Album, AlbumId, AlbumPage, VoteDirection};
pub use user::{AuthSession, User, UserId};
