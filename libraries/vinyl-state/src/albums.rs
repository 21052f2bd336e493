//! Album collection store: one page of a searchable, votable listing.

use crate::status::OperationStatus;
use crate::views;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use vinyl_client::{AlbumGateway, AlbumQuery};
use vinyl_core::{Album, AlbumId, AlbumPage, FailureKind, VoteDirection};

/// The current page of albums plus its cursors and search text.
///
/// `ranked_items` and `visible_items` are recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCollection {
    items: Vec<Album>,
    current_page: u32,
    total_pages: u32,
    search_query: String,
    status: OperationStatus,
}

impl Default for AlbumCollection {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            search_query: String::new(),
            status: OperationStatus::default(),
        }
    }
}

impl AlbumCollection {
    /// Albums in server order, as last fetched.
    pub fn items(&self) -> &[Album] {
        &self.items
    }

    /// Items by descending score, then name.
    pub fn ranked_items(&self) -> Vec<Album> {
        views::rank_albums(&self.items)
    }

    /// Ranked items narrowed to the search query.
    pub fn visible_items(&self) -> Vec<Album> {
        views::visible_albums(&self.items, &self.search_query)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.status.last_error()
    }

    pub fn last_error_kind(&self) -> Option<FailureKind> {
        self.status.last_error_kind()
    }

    fn apply_page(&mut self, page: &AlbumPage) {
        self.items = page.data.clone();
        self.current_page = page.current_page;
        self.total_pages = page.last_page;
    }

    /// Swap in the server's copy at the same position. `false` if absent.
    fn replace_album(&mut self, album: Album) -> bool {
        match self.items.iter_mut().find(|a| a.id == album.id) {
            Some(slot) => {
                *slot = album;
                true
            }
            None => false,
        }
    }

    fn remove_album(&mut self, album_id: AlbumId) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != album_id);
        self.items.len() != before
    }
}

/// Owns the `AlbumCollection` and mediates every album call.
///
/// Vote counts are never adjusted locally; the album returned by the server
/// replaces the stored one. Overlapping operations are not serialized, so
/// whichever response arrives last wins `items` and `last_error`.
pub struct AlbumStore {
    gateway: Arc<dyn AlbumGateway>,
    state: RwLock<AlbumCollection>,
}

impl AlbumStore {
    pub fn new(gateway: Arc<dyn AlbumGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(AlbumCollection::default()),
        }
    }

    /// Clone of the whole collection.
    pub async fn snapshot(&self) -> AlbumCollection {
        self.state.read().await.clone()
    }

    pub async fn items(&self) -> Vec<Album> {
        self.state.read().await.items.clone()
    }

    pub async fn ranked_items(&self) -> Vec<Album> {
        self.state.read().await.ranked_items()
    }

    pub async fn visible_items(&self) -> Vec<Album> {
        self.state.read().await.visible_items()
    }

    pub async fn current_page(&self) -> u32 {
        self.state.read().await.current_page
    }

    pub async fn total_pages(&self) -> u32 {
        self.state.read().await.total_pages
    }

    pub async fn search_query(&self) -> String {
        self.state.read().await.search_query.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error().map(str::to_string)
    }

    pub async fn last_error_kind(&self) -> Option<FailureKind> {
        self.state.read().await.last_error_kind()
    }

    /// Fetch one page and replace the collection with it.
    ///
    /// Nothing is merged: on success `items` and both cursors come from the
    /// response; on failure the previous page stays in place.
    pub async fn fetch_page(&self, page: u32, search: &str) -> Option<AlbumPage> {
        if page == 0 {
            self.state
                .write()
                .await
                .status
                .record_error(FailureKind::Invalid, "Page numbers start at 1");
            return None;
        }

        self.state.write().await.status.begin();
        let result = self
            .gateway
            .list_albums(AlbumQuery::new(page, search))
            .await;

        let mut state = self.state.write().await;
        match result {
            Ok(fetched) => {
                state.apply_page(&fetched);
                state.status.clear_error();
                state.status.succeed();
                debug!(
                    albums = fetched.data.len(),
                    current_page = fetched.current_page,
                    last_page = fetched.last_page,
                    "Album page loaded"
                );
                Some(fetched)
            }
            Err(e) => {
                warn!(error = %e, page, "Failed to fetch albums");
                state.status.fail(e.kind(), e.to_string());
                None
            }
        }
    }

    /// Re-fetch the current page with the current search text.
    pub async fn refresh(&self) -> Option<AlbumPage> {
        let (page, search) = {
            let state = self.state.read().await;
            (state.current_page, state.search_query.clone())
        };
        self.fetch_page(page, &search).await
    }

    /// Set the filter text and rewind to page 1. Does not fetch.
    pub async fn set_search_query(&self, text: &str) {
        let mut state = self.state.write().await;
        state.search_query = text.to_string();
        state.current_page = 1;
    }

    /// Vote on an album and adopt the server's updated record.
    ///
    /// If the album is no longer in `items` the response is dropped and the
    /// collection is left alone.
    pub async fn vote(&self, album_id: AlbumId, direction: VoteDirection) -> Option<Album> {
        self.state.write().await.status.begin();
        let result = self.gateway.vote(album_id, direction).await;

        let mut state = self.state.write().await;
        match result {
            Ok(album) => {
                state.status.succeed();
                if album.id != album_id {
                    warn!(
                        requested = album_id,
                        returned = album.id,
                        "Vote response names a different album; ignoring"
                    );
                } else if state.replace_album(album.clone()) {
                    debug!(album_id, score = album.vote_score(), "Vote applied");
                } else {
                    debug!(album_id, "Voted album not on current page; response dropped");
                }
                Some(album)
            }
            Err(e) => {
                warn!(error = %e, album_id, direction = %direction, "Vote failed");
                state.status.fail(e.kind(), e.to_string());
                None
            }
        }
    }

    /// Delete an album and drop it from `items`.
    ///
    /// Pagination cursors are not adjusted; callers that need accurate
    /// counts should re-fetch.
    pub async fn delete_album(&self, album_id: AlbumId) -> bool {
        self.state.write().await.status.begin();
        let result = self.gateway.delete_album(album_id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.status.succeed();
                let removed = state.remove_album(album_id);
                info!(album_id, removed, "Album deleted");
                true
            }
            Err(e) => {
                warn!(error = %e, album_id, "Delete failed");
                state.status.fail(e.kind(), e.to_string());
                false
            }
        }
    }

    /// Return to the freshly-constructed state.
    pub async fn reset(&self) {
        *self.state.write().await = AlbumCollection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(items: Vec<Album>) -> AlbumCollection {
        AlbumCollection {
            items,
            ..AlbumCollection::default()
        }
    }

    #[test]
    fn test_defaults() {
        let c = AlbumCollection::default();
        assert!(c.items().is_empty());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.total_pages(), 1);
        assert_eq!(c.search_query(), "");
        assert!(!c.has_next_page());
        assert!(!c.has_previous_page());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut c = collection(vec![
            Album::new(1, "A", "X"),
            Album::new(2, "B", "Y"),
            Album::new(3, "C", "Z"),
        ]);

        let updated = Album::new(2, "B (Remastered)", "Y").with_votes(4, 0);
        assert!(c.replace_album(updated.clone()));
        assert_eq!(c.items()[1], updated);
        assert_eq!(c.items()[0].id, 1);
        assert_eq!(c.items()[2].id, 3);

        assert!(!c.replace_album(Album::new(99, "Gone", "Nobody")));
        assert_eq!(c.items().len(), 3);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut c = collection(vec![
            Album::new(1, "A", "X"),
            Album::new(2, "B", "Y"),
            Album::new(3, "C", "Z"),
        ]);

        assert!(c.remove_album(2));
        let ids: Vec<_> = c.items().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(!c.remove_album(2));
    }

    #[test]
    fn test_apply_page_replaces_wholesale() {
        let mut c = collection(vec![Album::new(1, "Old", "X")]);
        c.apply_page(&AlbumPage {
            data: vec![Album::new(5, "New", "Y"), Album::new(6, "Newer", "Z")],
            current_page: 3,
            last_page: 4,
        });

        assert_eq!(c.items().len(), 2);
        assert_eq!(c.items()[0].id, 5);
        assert_eq!(c.current_page(), 3);
        assert_eq!(c.total_pages(), 4);
        assert!(c.has_next_page());
        assert!(c.has_previous_page());
    }
}
