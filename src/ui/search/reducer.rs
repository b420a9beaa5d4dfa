//! Reducer for the search feature.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{RequestState, SearchState};

/// Reducer for search state transitions.
///
/// Pure function: dispatching the fetch itself is the caller's job.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Edit { text } => SearchState {
                search_text: text,
                ..state
            },

            SearchIntent::Settle { text } => SearchState {
                debounced_text: text,
                ..state
            },

            // Loading replaces whatever the previous request left behind.
            SearchIntent::FetchStarted { seq } => SearchState {
                request: RequestState::Loading,
                latest_seq: seq,
                ..state
            },

            SearchIntent::FetchSucceeded { seq, movies } => {
                if seq != state.latest_seq || !state.request.is_loading() {
                    return state;
                }
                SearchState {
                    request: RequestState::Success(movies),
                    ..state
                }
            }

            SearchIntent::FetchFailed { seq, message } => {
                if seq != state.latest_seq || !state.request.is_loading() {
                    return state;
                }
                SearchState {
                    request: RequestState::Error(message),
                    ..state
                }
            }
        }
    }
}
