use serde::{Deserialize, Serialize};

/// A ranked search: how often a query was searched, plus a snapshot of the
/// top movie from its first search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub id: String,
    pub query: String,
    pub movie_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub count: u64,
}

/// Key under which a query is counted: trimmed and lowercased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Order by count, highest first, keeping the existing order among ties.
pub fn rank(entries: &mut Vec<TrendingEntry>, limit: usize) {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
}
