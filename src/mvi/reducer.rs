//! Reducer trait.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms slice state based on intents.
///
/// It must be a pure function: (State, Intent) -> State.
/// The store serializes calls, so a reducer never observes a
/// half-applied transition.
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
