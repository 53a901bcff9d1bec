//! Fetch orchestration: deciding whether to hit the network and folding
//! responses into a collection slice.

mod handle;
mod orchestrator;
mod status;

pub use handle::CollectionHandle;
pub use orchestrator::CollectionFetcher;
pub use status::FetchStatusTracker;

/// How a `fetch` call settled.
///
/// Every outcome leaves the store consistent; none of them is an error
/// from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// First page already fetched for this kind; nothing was requested.
    CacheHit,
    /// The page was merged into the collection.
    Committed { received: usize },
    /// The collection switched kind while the request was in flight; the
    /// response was dropped.
    Superseded,
    /// The server answered with an error flag or an unexpected shape.
    Malformed,
    /// The request itself failed.
    Failed,
}

impl FetchOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CacheHit => "cache_hit",
            Self::Committed { .. } => "committed",
            Self::Superseded => "superseded",
            Self::Malformed => "malformed",
            Self::Failed => "failed",
        }
    }
}
