use crate::trending::TrendingEntry;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrendingState {
    #[default]
    Pending,
    Loaded(Vec<TrendingEntry>),
    Unavailable,
}

impl UiState for TrendingState {}

impl TrendingState {
    pub fn entries(&self) -> &[TrendingEntry] {
        match self {
            Self::Loaded(entries) => entries,
            _ => &[],
        }
    }

    /// The section is rendered only when there is something to rank.
    pub fn is_visible(&self) -> bool {
        !self.entries().is_empty()
    }
}
