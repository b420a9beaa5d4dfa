//! Trending section state (MVI).

mod intent;
mod reducer;
mod state;

pub use intent::TrendingIntent;
pub use reducer::TrendingReducer;
pub use state::TrendingState;
