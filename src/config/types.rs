use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default = "default_collections")]
    pub collections: Vec<CollectionConfig>,
}

/// Remote collection endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every collection endpoint is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
}

/// How the store persists its slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Durable if a data directory can be created, otherwise no-op.
    #[default]
    Auto,
    /// Durable; failing to create the directory is an error.
    Durable,
    /// In-process only.
    Memory,
    /// Never persist.
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub mode: StorageMode,
    /// Directory for durable records. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Prefix of every persisted record key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// One paginated collection exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Slice name in the store (e.g., "listings").
    pub name: String,
    /// Path appended to the API base URL (e.g., "/products").
    pub endpoint: String,
    /// Whether the slice is written to storage.
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_namespace() -> String {
    "root".to_string()
}

fn default_persist() -> bool {
    true
}

fn default_collections() -> Vec<CollectionConfig> {
    vec![CollectionConfig::default()]
}

impl StorageConfig {
    /// Configured directory, or `<data_local_dir>/listsync`.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join("listsync")))
    }
}

impl Config {
    pub fn collection(&self, name: &str) -> Option<&CollectionConfig> {
        self.collections.iter().find(|c| c.name == name)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            token: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            mode: StorageMode::default(),
            dir: None,
            namespace: default_namespace(),
        }
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: "listings".to_string(),
            endpoint: "/products".to_string(),
            persist: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            collections: default_collections(),
        }
    }
}
