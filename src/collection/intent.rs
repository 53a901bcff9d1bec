use super::{Item, ResourceKind};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionIntent<T> {
    /// Replace all items (first page).
    SetFullCollection(Vec<T>),
    /// Append items after the existing ones (page > 1).
    AppendPage(Vec<T>),
    SetLoading(bool),
    SetLoadingMore(bool),
    SetPagination { current_page: u32, last_page: u32 },
    /// Empty the collection and bind it to `kind`.
    Reset { kind: ResourceKind },
}

impl<T: Item> Intent for CollectionIntent<T> {}
