//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are the only way a slice changes. They are produced by
/// orchestrators (fetch started, page received) and by callers that
/// reset or invalidate a collection.
pub trait Intent: Send + 'static {}
