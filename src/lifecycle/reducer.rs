//! Reducer for request lifecycle transitions.

use std::marker::PhantomData;

use super::intent::{Intent, LoadIntent};
use super::state::{LoadState, UiState};

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reducer for [`LoadState`].
///
/// Whether an intent is allowed to apply at all (busy slot, stale result)
/// is decided by [`Lifecycle`](super::Lifecycle) before reducing.
pub struct LoadReducer<T> {
    _marker: PhantomData<T>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Reducer for LoadReducer<T> {
    type State = LoadState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Start => LoadState::Loading,
            LoadIntent::Succeeded(value) => LoadState::Success(value),
            LoadIntent::Failed(message) => LoadState::Error(message),
            LoadIntent::Reset => LoadState::Idle,
        }
    }
}
