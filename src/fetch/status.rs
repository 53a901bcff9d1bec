//! "Already fetched" flags.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::collection::ResourceKind;

/// Per (collection, kind) record of whether a first page has ever been
/// fetched successfully in this process.
///
/// This is not an in-flight marker: loading flags live in the collection
/// slice. The tracker is owned by the store and shared by every fetcher
/// built on it, so clones observe the same flags.
#[derive(Debug, Clone, Default)]
pub struct FetchStatusTracker {
    inner: Arc<RwLock<HashMap<(String, ResourceKind), bool>>>,
}

impl FetchStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, collection: &str, kind: &ResourceKind) -> bool {
        self.inner
            .read()
            .get(&(collection.to_string(), kind.clone()))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&self, collection: &str, kind: &ResourceKind, fetched: bool) {
        let key = (collection.to_string(), kind.clone());
        let mut flags = self.inner.write();
        if fetched {
            flags.insert(key, true);
        } else {
            flags.remove(&key);
        }
    }

    /// Forget every kind of `collection`.
    pub fn invalidate(&self, collection: &str) {
        self.inner.write().retain(|(name, _), _| name != collection);
    }

    /// Forget everything.
    pub fn reset(&self) {
        self.inner.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_not_fetched() {
        let tracker = FetchStatusTracker::new();
        assert!(!tracker.get("listings", &ResourceKind::unfiltered()));
    }

    #[test]
    fn flags_are_scoped_by_collection_and_kind() {
        let tracker = FetchStatusTracker::new();
        let cars = ResourceKind::named("cars");
        tracker.set("listings", &cars, true);

        assert!(tracker.get("listings", &cars));
        assert!(!tracker.get("listings", &ResourceKind::unfiltered()));
        assert!(!tracker.get("orders", &cars));

        tracker.set("listings", &cars, false);
        assert!(!tracker.get("listings", &cars));
    }

    #[test]
    fn clones_share_state() {
        let tracker = FetchStatusTracker::new();
        let other = tracker.clone();
        other.set("listings", &ResourceKind::unfiltered(), true);
        assert!(tracker.get("listings", &ResourceKind::unfiltered()));
    }

    #[test]
    fn invalidate_and_reset() {
        let tracker = FetchStatusTracker::new();
        let cars = ResourceKind::named("cars");
        tracker.set("listings", &cars, true);
        tracker.set("listings", &ResourceKind::unfiltered(), true);
        tracker.set("orders", &cars, true);

        tracker.invalidate("listings");
        assert!(!tracker.get("listings", &cars));
        assert!(!tracker.get("listings", &ResourceKind::unfiltered()));
        assert!(tracker.get("orders", &cars));

        tracker.reset();
        assert!(!tracker.get("orders", &cars));
    }
}
