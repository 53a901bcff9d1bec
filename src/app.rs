//! Wiring from [`Config`] to a store with one fetcher per collection.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::fetch::CollectionFetcher;
use crate::source::{CollectionSource, FetchError, HttpCollectionSource};
use crate::storage::{self, ExecutionContext, StorageAdapter, StorageError};
use crate::store::{Persistence, RootStore, StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Source(#[from] FetchError),

    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),
}

/// Store plus fetchers for every configured collection.
///
/// Items stay untyped JSON; typed consumers register their own
/// collections through [`crate::store::StoreBuilder`].
pub struct App {
    store: RootStore,
    context: ExecutionContext,
    fetchers: BTreeMap<String, Arc<CollectionFetcher<Value>>>,
}

impl App {
    /// Probe the execution context, pick the storage adapter and compose
    /// the store with HTTP sources.
    pub fn build(config: &Config) -> Result<Self, AppError> {
        let context = ExecutionContext::probe(&config.storage)?;
        let storage = storage::select(&context);
        Self::build_with(config, context, storage, |endpoint| {
            let source = HttpCollectionSource::new(&config.api, endpoint)?;
            Ok(Arc::new(source) as Arc<dyn CollectionSource>)
        })
    }

    /// Same as [`App::build`] with an explicit adapter and source factory.
    pub fn build_with<F>(
        config: &Config,
        context: ExecutionContext,
        storage: Arc<dyn StorageAdapter>,
        mut make_source: F,
    ) -> Result<Self, AppError>
    where
        F: FnMut(&str) -> Result<Arc<dyn CollectionSource>, FetchError>,
    {
        let mut builder = RootStore::builder().with_namespace(config.storage.namespace.clone());
        let mut keys = Vec::with_capacity(config.collections.len());
        for collection in &config.collections {
            let key = builder
                .collection::<Value>(&collection.name, Persistence::from_flag(collection.persist))?;
            keys.push((collection, key));
        }
        let store = builder.build(storage);

        let mut fetchers = BTreeMap::new();
        for (collection, key) in keys {
            let source = make_source(&collection.endpoint)?;
            let fetcher = CollectionFetcher::new(store.clone(), key, source);
            fetchers.insert(collection.name.clone(), Arc::new(fetcher));
        }

        Ok(Self {
            store,
            context,
            fetchers,
        })
    }

    pub fn store(&self) -> &RootStore {
        &self.store
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn fetcher(&self, name: &str) -> Result<&Arc<CollectionFetcher<Value>>, AppError> {
        self.fetchers
            .get(name)
            .ok_or_else(|| AppError::UnknownCollection(name.to_string()))
    }

    pub fn collection_names(&self) -> Vec<&str> {
        self.fetchers.keys().map(String::as_str).collect()
    }
}
