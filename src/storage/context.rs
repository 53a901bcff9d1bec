use std::path::PathBuf;

use tracing::{info, warn};

use super::StorageError;
use crate::config::{StorageConfig, StorageMode};

/// Durable medium available to a client context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Medium {
    Directory(PathBuf),
    Memory,
}

/// Where the store is running, as far as persistence is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionContext {
    /// No durable medium (pre-hydration, headless rendering, read-only host).
    Server,
    /// A medium records can be written to.
    Client(Medium),
}

impl ExecutionContext {
    /// Probe the environment once, at store construction.
    ///
    /// `auto` falls back to [`ExecutionContext::Server`] when no directory
    /// can be created; `durable` turns the same situation into an error.
    pub fn probe(config: &StorageConfig) -> Result<Self, StorageError> {
        match config.mode {
            StorageMode::None => Ok(Self::Server),
            StorageMode::Memory => Ok(Self::Client(Medium::Memory)),
            StorageMode::Durable | StorageMode::Auto => {
                let Some(dir) = config.resolved_dir() else {
                    return Self::unavailable(config.mode, "no data directory on this platform");
                };
                match std::fs::create_dir_all(&dir) {
                    Ok(()) => {
                        info!(dir = %dir.display(), "durable storage available");
                        Ok(Self::Client(Medium::Directory(dir)))
                    }
                    Err(source) if config.mode == StorageMode::Durable => {
                        Err(StorageError::DirectoryUnavailable { path: dir, source })
                    }
                    Err(e) => {
                        warn!(dir = %dir.display(), error = %e, "storage directory unavailable");
                        Ok(Self::Server)
                    }
                }
            }
        }
    }

    fn unavailable(mode: StorageMode, reason: &str) -> Result<Self, StorageError> {
        if mode == StorageMode::Durable {
            return Err(StorageError::Unavailable(reason.to_string()));
        }
        warn!(reason, "falling back to no-op storage");
        Ok(Self::Server)
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}
