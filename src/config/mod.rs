//! Configuration: API endpoint, storage mode and the collections to
//! register with the store.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use types::{ApiConfig, CollectionConfig, Config, StorageConfig, StorageMode};
