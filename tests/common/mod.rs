//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;
pub mod mock_source;

use std::sync::Arc;

use listsync::collection::ResourceKind;
use listsync::fetch::CollectionFetcher;
use listsync::storage::{NoopStorage, StorageAdapter};
use listsync::store::{CollectionKey, Persistence, RootStore, StoreBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub use mock_source::{ScriptedSource, Step};

/// Item type used across tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
}

pub fn listings(ids: &[u64]) -> Vec<Listing> {
    ids.iter().map(|&id| Listing { id }).collect()
}

/// Well-formed page body.
pub fn page_body(ids: &[u64], current_page: u32, last_page: u32) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({
        "error": false,
        "data": {
            "data": data,
            "current_page": current_page,
            "last_page": last_page,
        }
    })
}

pub fn kind(name: &str) -> ResourceKind {
    ResourceKind::named(name)
}

/// Store with one persisted `listings` collection.
pub fn listing_store(storage: Arc<dyn StorageAdapter>) -> (RootStore, CollectionKey<Listing>) {
    let mut builder = StoreBuilder::new();
    let key = builder
        .collection::<Listing>("listings", Persistence::Persisted)
        .expect("register listings");
    (builder.build(storage), key)
}

/// Fetcher over a fresh no-op store and the given scripted source.
pub fn listing_fetcher(source: Arc<ScriptedSource>) -> (Arc<CollectionFetcher<Listing>>, RootStore) {
    let (store, key) = listing_store(Arc::new(NoopStorage));
    let fetcher = CollectionFetcher::new(store.clone(), key, source);
    (Arc::new(fetcher), store)
}

/// Yield until `condition` holds (bounded).
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
