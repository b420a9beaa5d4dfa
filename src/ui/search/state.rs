use crate::catalog::Movie;
use crate::ui::mvi::UiState;

/// Lifecycle of the movie list request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Movie>),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn movies(&self) -> &[Movie] {
        match self {
            Self::Success(movies) => movies,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Text as typed.
    pub search_text: String,
    /// Last value that survived the debounce window.
    pub debounced_text: String,
    pub request: RequestState,
    /// Sequence number of the most recently dispatched fetch. Completions
    /// carrying any other number are stale.
    pub latest_seq: u64,
}

impl UiState for SearchState {}

impl SearchState {
    /// Sequence number for the next dispatch.
    pub fn next_seq(&self) -> u64 {
        self.latest_seq.wrapping_add(1)
    }
}
