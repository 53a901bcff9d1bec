//! Root store: every slice in one state tree.
//!
//! The store applies intents under a single lock, notifies listeners,
//! and forwards persisted slices to a background writer bound to the
//! [`StorageAdapter`] chosen at construction. Storage failures are logged
//! and never reach callers; the in-memory tree stays authoritative.

mod error;
mod persist;
mod registry;
mod slice;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::{debug, error, info, trace, warn};

use crate::fetch::FetchStatusTracker;
use crate::mvi::Reducer;
use crate::storage::StorageAdapter;

pub use error::StoreError;
pub use registry::{CollectionKey, Persistence, SliceKey, StoreBuilder};

use persist::PersistWriter;
use registry::SliceEntry;
use slice::SliceCell;

/// JSON projection of the whole state tree, keyed by slice name.
pub type StateSnapshot = BTreeMap<String, Value>;

/// What caused a listener call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCause {
    Dispatch,
    Rehydrate,
}

/// Passed to listeners after a slice changed.
#[derive(Debug, Clone, Copy)]
pub struct StoreEvent<'a> {
    pub slice: &'a str,
    pub cause: EventCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&StoreEvent<'_>) + Send + Sync>;

/// Result of [`RootStore::rehydrate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RehydrationReport {
    /// Slices replaced by their persisted record.
    pub restored: Vec<String>,
    /// Persisted slices with no record yet.
    pub missing: Vec<String>,
    /// Slices whose record could not be read or decoded.
    pub failed: Vec<String>,
}

/// Process-wide store. Clones share the same tree.
#[derive(Clone)]
pub struct RootStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    namespace: String,
    slices: Mutex<BTreeMap<Arc<str>, SliceEntry>>,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    next_listener: AtomicU64,
    fetch_status: FetchStatusTracker,
    storage: Arc<dyn StorageAdapter>,
    writer: Option<PersistWriter>,
}

impl RootStore {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    fn from_parts(
        namespace: String,
        slices: BTreeMap<Arc<str>, SliceEntry>,
        storage: Arc<dyn StorageAdapter>,
    ) -> Self {
        let writer = PersistWriter::spawn(Arc::clone(&storage));
        if writer.is_none() {
            warn!(
                adapter = storage.name(),
                "no async runtime, persistence disabled"
            );
        }
        info!(
            namespace = %namespace,
            slices = slices.len(),
            adapter = storage.name(),
            "store composed"
        );

        Self {
            inner: Arc::new(StoreInner {
                namespace,
                slices: Mutex::new(slices),
                listeners: RwLock::new(Vec::new()),
                next_listener: AtomicU64::new(1),
                fetch_status: FetchStatusTracker::new(),
                storage,
                writer,
            }),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// Storage key of a slice's persisted record.
    pub fn record_key(&self, slice: &str) -> String {
        format!("{}:{}", self.inner.namespace, slice)
    }

    pub fn storage_name(&self) -> &'static str {
        self.inner.storage.name()
    }

    /// Whether dispatches reach the storage adapter.
    pub fn is_persisting(&self) -> bool {
        self.inner.writer.is_some()
    }

    /// Fetch-status flags shared by every fetcher built on this store.
    pub fn fetch_status(&self) -> &FetchStatusTracker {
        &self.inner.fetch_status
    }

    /// Apply one intent.
    pub fn dispatch<R: Reducer>(&self, key: &SliceKey<R>, intent: R::Intent) {
        self.dispatch_with(key, move |_| vec![intent]);
    }

    /// Apply several intents as one transition: listeners are called once
    /// and one record is persisted.
    pub fn dispatch_batch<R: Reducer>(&self, key: &SliceKey<R>, intents: Vec<R::Intent>) {
        self.dispatch_with(key, move |_| intents);
    }

    /// Compute intents from the current state and apply them atomically.
    ///
    /// Returns the number of intents applied; an empty list leaves the
    /// store untouched and notifies nobody.
    pub fn dispatch_with<R, F>(&self, key: &SliceKey<R>, decide: F) -> usize
    where
        R: Reducer,
        F: FnOnce(&R::State) -> Vec<R::Intent>,
    {
        let applied = {
            let mut slices = self.inner.slices.lock();
            let Some(entry) = slices.get_mut(key.name()) else {
                error!(slice = key.name(), "dispatch to unknown slice");
                return 0;
            };
            let persistence = entry.persistence;
            let Some(cell) = entry.cell.as_any_mut().downcast_mut::<SliceCell<R>>() else {
                error!(slice = key.name(), "dispatch with mismatched slice type");
                return 0;
            };

            let intents = decide(&cell.state);
            if intents.is_empty() {
                return 0;
            }
            let applied = intents.len();
            for intent in intents {
                cell.apply(intent);
            }

            // queued under the lock so records reach the writer in apply order
            if persistence == Persistence::Persisted {
                match entry.cell.encode() {
                    Ok(record) => self.persist(key.name(), record),
                    Err(e) => error!(slice = key.name(), error = %e, "failed to encode slice"),
                }
            }
            applied
        };

        trace!(slice = key.name(), applied, "dispatched");
        self.notify(key.name(), EventCause::Dispatch);
        applied
    }

    /// Current state of one slice.
    ///
    /// A key that does not belong to this store yields the default state.
    pub fn select<R: Reducer>(&self, key: &SliceKey<R>) -> R::State {
        let slices = self.inner.slices.lock();
        match slices
            .get(key.name())
            .and_then(|entry| entry.cell.as_any().downcast_ref::<SliceCell<R>>())
        {
            Some(cell) => cell.state.clone(),
            None => {
                error!(slice = key.name(), "select on unknown slice");
                R::State::default()
            }
        }
    }

    /// JSON projection of every slice.
    pub fn get_state(&self) -> StateSnapshot {
        let slices = self.inner.slices.lock();
        let mut snapshot = StateSnapshot::new();
        for (name, entry) in slices.iter() {
            match entry.cell.snapshot() {
                Ok(value) => {
                    snapshot.insert(name.to_string(), value);
                }
                Err(e) => error!(slice = %name, error = %e, "failed to snapshot slice"),
            }
        }
        snapshot
    }

    /// Names of every registered slice.
    pub fn slice_names(&self) -> Vec<String> {
        self.inner
            .slices
            .lock()
            .keys()
            .map(|name| name.to_string())
            .collect()
    }

    /// Call `listener` after every change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent<'_>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Replace every persisted slice with its last stored record.
    ///
    /// Whole-slice replacement: whatever the slice held before is dropped.
    /// Meant to run once at startup, before the first dispatch.
    pub async fn rehydrate(&self) -> RehydrationReport {
        let mut report = RehydrationReport::default();

        for name in self.persisted_slices() {
            let key = self.record_key(&name);
            let record = match self.inner.storage.get(&key).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    report.missing.push(name);
                    continue;
                }
                Err(e) => {
                    warn!(slice = %name, error = %e, "failed to read persisted slice");
                    report.failed.push(name);
                    continue;
                }
            };

            let restored = {
                let mut slices = self.inner.slices.lock();
                match slices.get_mut(name.as_str()) {
                    Some(entry) => entry.cell.restore(&record),
                    None => continue,
                }
            };

            match restored {
                Ok(()) => {
                    debug!(slice = %name, bytes = record.len(), "slice rehydrated");
                    self.notify(&name, EventCause::Rehydrate);
                    report.restored.push(name);
                }
                Err(e) => {
                    warn!(slice = %name, error = %e, "discarding undecodable persisted slice");
                    report.failed.push(name);
                }
            }
        }

        info!(
            restored = report.restored.len(),
            missing = report.missing.len(),
            failed = report.failed.len(),
            "rehydration finished"
        );
        report
    }

    /// Wait until every record queued so far has reached storage.
    pub async fn flush(&self) {
        if let Some(writer) = &self.inner.writer {
            writer.flush().await;
        }
    }

    /// Remove every persisted record. In-memory state is kept.
    pub async fn purge(&self) {
        let keys: Vec<String> = self
            .persisted_slices()
            .iter()
            .map(|name| self.record_key(name))
            .collect();

        match &self.inner.writer {
            Some(writer) => {
                for key in keys {
                    writer.remove(key);
                }
                writer.flush().await;
            }
            None => {
                for key in keys {
                    if let Err(e) = self.inner.storage.remove(&key).await {
                        warn!(key = %key, error = %e, "failed to remove persisted slice");
                    }
                }
            }
        }
        info!(namespace = %self.inner.namespace, "persisted slices purged");
    }

    fn persisted_slices(&self) -> Vec<String> {
        self.inner
            .slices
            .lock()
            .iter()
            .filter(|(_, entry)| entry.persistence == Persistence::Persisted)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    fn persist(&self, slice: &str, record: String) {
        if let Some(writer) = &self.inner.writer {
            writer.write(self.record_key(slice), record);
        }
    }

    fn notify(&self, slice: &str, cause: EventCause) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        let event = StoreEvent { slice, cause };
        for listener in listeners {
            listener(&event);
        }
    }
}
