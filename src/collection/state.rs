use serde::{Deserialize, Serialize};

use super::{Item, ResourceKind};
use crate::mvi::SliceState;

/// A paginated collection as the UI sees it.
///
/// Loading flags describe in-flight work of this process only and are
/// never persisted; a rehydrated collection always starts idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionState<T> {
    /// Kind the items belong to. `None` until the first fetch.
    #[serde(default)]
    pub kind: Option<ResourceKind>,
    pub items: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(skip)]
    pub is_loading: bool,
    #[serde(skip)]
    pub is_loading_more: bool,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            kind: None,
            items: Vec::new(),
            current_page: 1,
            last_page: 1,
            is_loading: false,
            is_loading_more: false,
        }
    }
}

impl<T: Item> SliceState for CollectionState<T> {}

impl<T> CollectionState<T> {
    /// Whether the server reported pages beyond the current one.
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_loading_more
    }

    /// Whether the collection currently holds items of `kind`.
    pub fn is_bound_to(&self, kind: &ResourceKind) -> bool {
        self.kind.as_ref() == Some(kind)
    }
}
