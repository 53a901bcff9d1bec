use async_trait::async_trait;

use super::{StorageAdapter, StorageError};

/// Storage for contexts without a durable medium.
///
/// Every operation resolves immediately and succeeds; nothing is retained,
/// so `get` always answers `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStorage;

#[async_trait]
impl StorageAdapter for NoopStorage {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, value: String) -> Result<String, StorageError> {
        Ok(value)
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
