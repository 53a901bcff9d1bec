use std::sync::Arc;

use scopeguard::guard;
use tracing::{debug, info, warn};

use super::{CollectionHandle, FetchOutcome, FetchStatusTracker};
use crate::collection::{CollectionIntent, CollectionState, Item, ResourceKind};
use crate::source::{parse_page, CollectionSource, Page, PageRequest};
use crate::store::{CollectionKey, RootStore};

/// Fetches pages of one collection slice.
///
/// Concurrent calls are not serialized. Two page-1 requests for the same
/// kind both commit and the one resolving last wins; callers avoid firing
/// duplicates.
pub struct CollectionFetcher<T: Item> {
    store: RootStore,
    key: CollectionKey<T>,
    source: Arc<dyn CollectionSource>,
    status: FetchStatusTracker,
}

impl<T: Item> CollectionFetcher<T> {
    /// Fetcher using the store's fetch-status tracker.
    pub fn new(store: RootStore, key: CollectionKey<T>, source: Arc<dyn CollectionSource>) -> Self {
        let status = store.fetch_status().clone();
        Self::with_status(store, key, source, status)
    }

    pub fn with_status(
        store: RootStore,
        key: CollectionKey<T>,
        source: Arc<dyn CollectionSource>,
        status: FetchStatusTracker,
    ) -> Self {
        Self {
            store,
            key,
            source,
            status,
        }
    }

    /// Caller-facing handle bound to `kind`.
    pub fn handle(self: &Arc<Self>, kind: ResourceKind) -> CollectionHandle<T> {
        CollectionHandle::new(Arc::clone(self), kind)
    }

    pub fn state(&self) -> CollectionState<T> {
        self.store.select(&self.key)
    }

    /// Forget that any kind of this collection was fetched; the next
    /// page-1 call goes to the network.
    pub fn invalidate(&self) {
        self.status.invalidate(self.key.name());
        info!(collection = self.key.name(), "collection invalidated");
    }

    /// Fetch `page` of `kind` into the collection.
    ///
    /// Page 1 replaces the items, later pages are appended. A page-1 call
    /// for an already fetched kind returns [`FetchOutcome::CacheHit`]
    /// unless `force` is set. Loading flags are cleared however the call
    /// ends, including when the future is dropped.
    pub async fn fetch(&self, page: u32, force: bool, kind: &ResourceKind) -> FetchOutcome {
        let page = page.max(1);
        let first_page = page == 1;
        let collection = self.key.name();

        let kind_changed = self.store.dispatch_with(&self.key, |state| {
            if state.is_bound_to(kind) {
                Vec::new()
            } else {
                vec![CollectionIntent::Reset { kind: kind.clone() }]
            }
        }) > 0;
        if kind_changed {
            self.status.set(collection, kind, false);
            debug!(collection, kind = %kind, "resource kind changed, collection reset");
        }

        if first_page && !force && !kind_changed && self.status.get(collection, kind) {
            debug!(collection, kind = %kind, "cache hit");
            return FetchOutcome::CacheHit;
        }

        let loading = if first_page {
            CollectionIntent::SetLoading(true)
        } else {
            CollectionIntent::SetLoadingMore(true)
        };
        self.store.dispatch(&self.key, loading);
        let _loading = guard((self.store.clone(), self.key.clone()), |(store, key)| {
            store.dispatch_batch(
                &key,
                vec![
                    CollectionIntent::SetLoading(false),
                    CollectionIntent::SetLoadingMore(false),
                ],
            );
        });

        let request = PageRequest {
            page,
            kind: kind.clone(),
        };
        let body = match self.source.fetch_page(&request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    collection,
                    kind = %kind,
                    page,
                    error_type = e.error_type(),
                    error = %e,
                    "page request failed"
                );
                return FetchOutcome::Failed;
            }
        };

        let Page {
            items,
            current_page,
            last_page,
        } = match parse_page::<T>(body) {
            Ok(page) => page,
            Err(e) => {
                warn!(collection, kind = %kind, page, error = %e, "malformed page response ignored");
                return FetchOutcome::Malformed;
            }
        };

        let received = items.len();
        let committed = self.store.dispatch_with(&self.key, move |state| {
            if !state.is_bound_to(kind) {
                return Vec::new();
            }
            let merge = if first_page {
                CollectionIntent::SetFullCollection(items)
            } else {
                CollectionIntent::AppendPage(items)
            };
            vec![
                merge,
                CollectionIntent::SetPagination {
                    current_page,
                    last_page,
                },
            ]
        }) > 0;

        if !committed {
            debug!(collection, kind = %kind, page, "response superseded by kind change");
            return FetchOutcome::Superseded;
        }

        if first_page {
            self.status.set(collection, kind, true);
        }
        debug!(
            collection,
            kind = %kind,
            page = current_page,
            last_page,
            received,
            "page committed"
        );
        FetchOutcome::Committed { received }
    }
}
