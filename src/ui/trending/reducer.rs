use crate::ui::mvi::Reducer;

use super::intent::TrendingIntent;
use super::state::TrendingState;

pub struct TrendingReducer;

impl Reducer for TrendingReducer {
    type State = TrendingState;
    type Intent = TrendingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TrendingIntent::Loaded { entries } => TrendingState::Loaded(entries),
            // Keep an earlier list rather than blanking it.
            TrendingIntent::Unavailable => match state {
                TrendingState::Loaded(entries) => TrendingState::Loaded(entries),
                _ => TrendingState::Unavailable,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trending::TrendingEntry;

    fn entry(query: &str, count: u64) -> TrendingEntry {
        TrendingEntry {
            id: query.to_string(),
            query: query.to_string(),
            movie_id: 1,
            title: query.to_string(),
            poster_url: None,
            count,
        }
    }

    #[test]
    fn pending_is_hidden() {
        assert!(!TrendingState::default().is_visible());
    }

    #[test]
    fn loaded_entries_are_visible() {
        let state = TrendingReducer::reduce(
            TrendingState::Pending,
            TrendingIntent::Loaded {
                entries: vec![entry("heat", 2)],
            },
        );
        assert!(state.is_visible());
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn loaded_empty_list_is_hidden() {
        let state = TrendingReducer::reduce(
            TrendingState::Pending,
            TrendingIntent::Loaded { entries: vec![] },
        );
        assert!(!state.is_visible());
    }

    #[test]
    fn failure_leaves_section_hidden() {
        let state = TrendingReducer::reduce(TrendingState::Pending, TrendingIntent::Unavailable);
        assert_eq!(state, TrendingState::Unavailable);
        assert!(!state.is_visible());
    }

    #[test]
    fn failure_keeps_stale_list() {
        let state = TrendingState::Loaded(vec![entry("heat", 2)]);
        let state = TrendingReducer::reduce(state, TrendingIntent::Unavailable);
        assert_eq!(state.entries().len(), 1);
    }
}
