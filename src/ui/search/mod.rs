//! Search feature module.
//!
//! Tracks the search box text, its debounced value, and the lifecycle of
//! the movie request.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `SearchState` and `RequestState` (Idle → Loading → Success | Error)
//! - `intent.rs` - Keystrokes, settled queries, fetch lifecycle events
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{RequestState, SearchState};
