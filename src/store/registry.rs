//! Slice registry: name → (initial state, reducer, persistence).

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::slice::{ErasedSlice, SliceCell};
use super::{RootStore, StoreError};
use crate::collection::{CollectionReducer, Item};
use crate::mvi::Reducer;
use crate::storage::StorageAdapter;

const DEFAULT_NAMESPACE: &str = "root";

/// Whether a slice is written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Persisted,
    Transient,
}

impl Persistence {
    pub fn from_flag(persist: bool) -> Self {
        if persist {
            Self::Persisted
        } else {
            Self::Transient
        }
    }
}

/// Typed handle to a registered slice.
///
/// The reducer type travels with the key, so `dispatch` and `select`
/// can only be called with the intent and state types the slice was
/// registered with.
pub struct SliceKey<R> {
    name: Arc<str>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R> SliceKey<R> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R> Clone for SliceKey<R> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            _reducer: PhantomData,
        }
    }
}

impl<R> fmt::Debug for SliceKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SliceKey").field(&self.name).finish()
    }
}

pub type CollectionKey<T> = SliceKey<CollectionReducer<T>>;

pub(crate) struct SliceEntry {
    pub(crate) cell: Box<dyn ErasedSlice>,
    pub(crate) persistence: Persistence,
}

/// Collects slices before the store exists.
pub struct StoreBuilder {
    namespace: String,
    slices: BTreeMap<Arc<str>, SliceEntry>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            slices: BTreeMap::new(),
        }
    }

    /// Prefix of every persisted record key.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Register a slice starting from `R::State::default()`.
    pub fn register<R: Reducer>(
        &mut self,
        name: &str,
        persistence: Persistence,
    ) -> Result<SliceKey<R>, StoreError> {
        self.register_with::<R>(name, R::State::default(), persistence)
    }

    pub fn register_with<R: Reducer>(
        &mut self,
        name: &str,
        initial: R::State,
        persistence: Persistence,
    ) -> Result<SliceKey<R>, StoreError> {
        validate_name(name)?;
        if self.slices.contains_key(name) {
            return Err(StoreError::DuplicateSlice {
                name: name.to_string(),
            });
        }

        let name: Arc<str> = Arc::from(name);
        self.slices.insert(
            Arc::clone(&name),
            SliceEntry {
                cell: Box::new(SliceCell::<R>::new(initial)),
                persistence,
            },
        );

        Ok(SliceKey {
            name,
            _reducer: PhantomData,
        })
    }

    /// Register a paginated collection of `T`.
    pub fn collection<T: Item>(
        &mut self,
        name: &str,
        persistence: Persistence,
    ) -> Result<CollectionKey<T>, StoreError> {
        self.register::<CollectionReducer<T>>(name, persistence)
    }

    /// Compose the registered slices into a store persisting through
    /// `storage`.
    pub fn build(self, storage: Arc<dyn StorageAdapter>) -> RootStore {
        RootStore::from_parts(self.namespace, self.slices, storage)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let reason = if name.trim().is_empty() {
        "must not be empty"
    } else if name.contains(':') {
        "must not contain ':'"
    } else {
        return Ok(());
    };
    Err(StoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
