//! Remote collection endpoint.
//!
//! The orchestrator asks a [`CollectionSource`] for one page and gets the
//! raw JSON body back; judging whether that body is well formed is
//! [`parse_page`]'s job, so every source shares the same notion of a
//! malformed response.

mod error;
mod http;
mod response;

use async_trait::async_trait;
use serde_json::Value;

use crate::collection::ResourceKind;

pub use error::FetchError;
pub use http::HttpCollectionSource;
pub use response::{parse_page, MalformedResponse, Page};

/// One page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub kind: ResourceKind,
}

/// Something that can produce pages of a collection.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Fetch the raw response body for `request`.
    ///
    /// `Err` means the transport failed (connection, timeout, non-2xx,
    /// undecodable body). A body that decodes but has the wrong shape is
    /// still `Ok`.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Value, FetchError>;
}
