//! Paginated collection slice.
//!
//! One [`CollectionState`] holds the items of a single resource kind plus
//! the pagination cursors and loading flags the UI reads. All changes go
//! through [`CollectionReducer`].

mod intent;
mod kind;
mod reducer;
mod state;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use intent::CollectionIntent;
pub use kind::ResourceKind;
pub use reducer::CollectionReducer;
pub use state::CollectionState;

/// Element type of a collection.
///
/// Anything the remote endpoint returns and the store can persist.
pub trait Item: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Item for T where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
