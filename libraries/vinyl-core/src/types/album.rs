//! Album types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VinylError;

pub type AlbumId = i64;

/// Direction of a vote cast on an album.
///
/// Serialized as `"upvote"` / `"downvote"` to match the server payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteDirection {
    #[serde(rename = "upvote")]
    Up,
    #[serde(rename = "downvote")]
    Down,
}

impl VoteDirection {
    /// Wire value sent in the vote request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "upvote",
            VoteDirection::Down => "downvote",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = VinylError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "upvote" | "+" => Ok(VoteDirection::Up),
            "down" | "downvote" | "-" => Ok(VoteDirection::Down),
            other => Err(VinylError::invalid_input(format!(
                "unknown vote direction '{}' (expected up or down)",
                other
            ))),
        }
    }
}

/// An album as returned by the server.
///
/// Identity is `id`; every other field is replaced wholesale whenever the
/// server hands back a newer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    /// The viewer's own vote, if any
    #[serde(rename = "userVote", default, skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<VoteDirection>,
}

impl Album {
    /// Create an album with no votes.
    pub fn new(id: AlbumId, name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artist: artist.into(),
            cover: None,
            upvotes: 0,
            downvotes: 0,
            user_vote: None,
        }
    }

    /// Builder-style vote counts, mostly for fixtures.
    pub fn with_votes(mut self, upvotes: i64, downvotes: i64) -> Self {
        self.upvotes = upvotes;
        self.downvotes = downvotes;
        self
    }

    /// Net score used for ranking: upvotes minus downvotes.
    pub fn vote_score(&self) -> i64 {
        self.upvotes.saturating_sub(self.downvotes)
    }

    /// Case-insensitive substring match against name or artist.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

/// One page of the album listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumPage {
    pub data: Vec<Album>,
    /// 1-based page index of `data`
    pub current_page: u32,
    /// Total number of pages for the current search
    pub last_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_score_can_go_negative() {
        let album = Album::new(1, "Kid A", "Radiohead").with_votes(2, 9);
        assert_eq!(album.vote_score(), -7);
    }

    #[test]
    fn test_vote_score_saturates() {
        let album = Album::new(1, "Odd", "Server").with_votes(i64::MAX, -5);
        assert_eq!(album.vote_score(), i64::MAX);

        let album = Album::new(2, "Odd", "Server").with_votes(i64::MIN, 5);
        assert_eq!(album.vote_score(), i64::MIN);
    }

    #[test]
    fn test_parse_wire_album_ignores_extra_fields() {
        let album: Album = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Discovery",
            "artist": "Daft Punk",
            "cover": "covers/discovery.jpg",
            "upvotes": 12,
            "downvotes": 3,
            "total_votes": 15,
            "votes": 9,
            "userVote": "downvote"
        }))
        .unwrap();

        assert_eq!(album.id, 7);
        assert_eq!(album.cover.as_deref(), Some("covers/discovery.jpg"));
        assert_eq!(album.vote_score(), 9);
        assert_eq!(album.user_vote, Some(VoteDirection::Down));
    }

    #[test]
    fn test_parse_null_user_vote() {
        let album: Album = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Homogenic",
            "artist": "Björk",
            "upvotes": 0,
            "downvotes": 0,
            "userVote": null
        }))
        .unwrap();

        assert!(album.user_vote.is_none());
        assert!(album.cover.is_none());
    }

    #[test]
    fn test_vote_direction_from_str() {
        assert_eq!("up".parse::<VoteDirection>().unwrap(), VoteDirection::Up);
        assert_eq!("UPVOTE".parse::<VoteDirection>().unwrap(), VoteDirection::Up);
        assert_eq!("down".parse::<VoteDirection>().unwrap(), VoteDirection::Down);
        assert!("sideways".parse::<VoteDirection>().is_err());
    }

    #[test]
    fn test_matches_lowercase_name_or_artist() {
        let album = Album::new(1, "Blue Train", "John Coltrane");
        assert!(album.matches_lowercase("blue"));
        assert!(album.matches_lowercase("coltrane"));
        assert!(!album.matches_lowercase("miles"));
    }
}
