use std::marker::PhantomData;

use super::{CollectionIntent, CollectionState, Item};
use crate::mvi::Reducer;

pub struct CollectionReducer<T>(PhantomData<fn() -> T>);

impl<T: Item> Reducer for CollectionReducer<T> {
    type State = CollectionState<T>;
    type Intent = CollectionIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollectionIntent::SetFullCollection(items) => CollectionState { items, ..state },
            CollectionIntent::AppendPage(page) => {
                let mut items = state.items;
                items.extend(page);
                CollectionState { items, ..state }
            }
            CollectionIntent::SetLoading(is_loading) => CollectionState { is_loading, ..state },
            CollectionIntent::SetLoadingMore(is_loading_more) => CollectionState {
                is_loading_more,
                ..state
            },
            CollectionIntent::SetPagination {
                current_page,
                last_page,
            } => CollectionState {
                current_page: current_page.max(1),
                last_page: last_page.max(1),
                ..state
            },
            CollectionIntent::Reset { kind } => CollectionState {
                kind: Some(kind),
                ..CollectionState::default()
            },
        }
    }
}
