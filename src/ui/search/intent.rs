//! Intents for the search feature.

use crate::catalog::Movie;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Search box text changed (every keystroke).
    Edit { text: String },

    /// Debouncer emitted a settled query.
    Settle { text: String },

    /// A fetch tagged `seq` was dispatched.
    FetchStarted { seq: u64 },

    /// Fetch `seq` returned movies.
    FetchSucceeded { seq: u64, movies: Vec<Movie> },

    /// Fetch `seq` failed; `message` is what the user sees.
    FetchFailed { seq: u64, message: String },
}

impl Intent for SearchIntent {}
