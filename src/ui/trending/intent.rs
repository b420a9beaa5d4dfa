use crate::trending::TrendingEntry;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TrendingIntent {
    Loaded { entries: Vec<TrendingEntry> },
    /// Store read failed; the section stays hidden.
    Unavailable,
}

impl Intent for TrendingIntent {}
