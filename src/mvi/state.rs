//! Base trait for slice state.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker trait for the state held by one slice of the store.
///
/// States are:
/// - Cloneable (selectors hand out copies)
/// - Comparable (PartialEq for change detection in tests and listeners)
/// - Defaultable (the registry's initial value)
/// - Serializable (the persisted projection of the slice)
pub trait SliceState:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
}
