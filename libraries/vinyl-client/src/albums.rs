//! Album listing, voting and deletion for the Vinyl Vote API.

use crate::client::{parse_json, unexpected_status};
use crate::error::{ClientError, Result};
use crate::types::{AlbumEnvelope, AlbumQuery, VoteRequest};
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;
use vinyl_core::{Album, AlbumId, AlbumPage, VoteDirection};

/// Album client for the Vinyl Vote API.
pub struct AlbumClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<String>,
}

impl<'a> AlbumClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Get one page of albums, optionally filtered by `query.search`.
    pub async fn list_albums(&self, query: &AlbumQuery) -> Result<AlbumPage> {
        let mut url = Url::parse(&format!("{}/albums", self.base_url))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("page", &query.page.to_string());
            if !query.search.is_empty() {
                params.append_pair("search", &query.search);
            }
        }

        debug!(url = %url, page = query.page, search = %query.search, "Fetching albums");

        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if response.status().is_success() {
            let page: AlbumPage = parse_json(response, "album list").await?;

            debug!(
                albums = page.data.len(),
                current_page = page.current_page,
                last_page = page.last_page,
                "Fetched albums"
            );

            Ok(page)
        } else {
            Err(unexpected_status(response).await)
        }
    }

    /// Cast a vote and return the server's updated copy of the album.
    pub async fn vote(&self, album_id: AlbumId, direction: VoteDirection) -> Result<Album> {
        let url = format!("{}/album/{}/vote", self.base_url, album_id);
        debug!(url = %url, album_id, direction = %direction, "Casting vote");

        let response = self
            .authorize(self.http.post(&url))
            .json(&VoteRequest { value: direction })
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if response.status().is_success() {
            let envelope: AlbumEnvelope = parse_json(response, "vote").await?;
            let album = envelope.into_album();

            debug!(
                album_id = album.id,
                upvotes = album.upvotes,
                downvotes = album.downvotes,
                "Vote recorded"
            );

            Ok(album)
        } else {
            Err(unexpected_status(response).await)
        }
    }

    /// Delete an album. Only the owner (or an admin) may do this.
    pub async fn delete_album(&self, album_id: AlbumId) -> Result<()> {
        let url = format!("{}/albums/{}", self.base_url, album_id);
        debug!(url = %url, album_id, "Deleting album");

        let response = self
            .authorize(self.http.delete(&url))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if response.status().is_success() {
            debug!(album_id, "Album deleted");
            Ok(())
        } else {
            Err(unexpected_status(response).await)
        }
    }
}
