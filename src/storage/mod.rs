//! Key/value persistence behind the store.
//!
//! The store only ever talks to [`StorageAdapter`]. Which implementation
//! backs it is decided once, at construction, by probing the
//! [`ExecutionContext`]:
//!
//! - [`NoopStorage`]: no durable medium; accepts everything, keeps nothing
//! - [`FileStorage`]: one JSON file per key under a directory
//! - [`MemoryStorage`]: process-local map

mod context;
mod file;
mod memory;
mod noop;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use context::{ExecutionContext, Medium};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use noop::NoopStorage;

/// Errors raised by storage adapters.
///
/// The store logs these and keeps its in-memory state authoritative;
/// they never reach callers of `dispatch`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage directory '{path}' unavailable: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous key/value medium.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Adapter name for logging.
    fn name(&self) -> &'static str;

    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key` and hand it back.
    async fn set(&self, key: &str, value: String) -> Result<String, StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Build the adapter matching a probed execution context.
pub fn select(context: &ExecutionContext) -> Arc<dyn StorageAdapter> {
    match context {
        ExecutionContext::Server => Arc::new(NoopStorage),
        ExecutionContext::Client(Medium::Memory) => Arc::new(MemoryStorage::new()),
        ExecutionContext::Client(Medium::Directory(dir)) => Arc::new(FileStorage::new(dir.clone())),
    }
}
