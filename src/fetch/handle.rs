use std::sync::Arc;

use super::{CollectionFetcher, FetchOutcome};
use crate::collection::{CollectionState, Item, ResourceKind};

/// A collection as one caller sees it: a read-only projection plus the
/// `fetch` trigger, bound to one resource kind.
pub struct CollectionHandle<T: Item> {
    fetcher: Arc<CollectionFetcher<T>>,
    kind: ResourceKind,
}

impl<T: Item> Clone for CollectionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            kind: self.kind.clone(),
        }
    }
}

impl<T: Item> CollectionHandle<T> {
    pub fn new(fetcher: Arc<CollectionFetcher<T>>, kind: ResourceKind) -> Self {
        Self { fetcher, kind }
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    pub async fn fetch(&self, page: u32, force: bool) -> FetchOutcome {
        self.fetcher.fetch(page, force, &self.kind).await
    }

    /// Load the page after the current one.
    ///
    /// Returns `None` when there is nothing more to load or a next page is
    /// already loading. If the collection holds another kind, starts over
    /// at page 1.
    pub async fn fetch_next(&self) -> Option<FetchOutcome> {
        let state = self.state();
        if !state.is_bound_to(&self.kind) {
            return Some(self.fetch(1, false).await);
        }
        if !state.has_more() || state.is_loading_more {
            return None;
        }
        Some(self.fetch(state.current_page + 1, false).await)
    }

    /// Refetch page 1, bypassing the cache.
    pub async fn refresh(&self) -> FetchOutcome {
        self.fetch(1, true).await
    }

    pub fn state(&self) -> CollectionState<T> {
        self.fetcher.state()
    }

    pub fn items(&self) -> Vec<T> {
        self.state().items
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.state().is_loading_more
    }

    pub fn current_page(&self) -> u32 {
        self.state().current_page
    }

    pub fn last_page(&self) -> u32 {
        self.state().last_page
    }

    pub fn has_more(&self) -> bool {
        self.state().has_more()
    }
}
