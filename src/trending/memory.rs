//! Process-local trending store.
//!
//! Used when no remote document store is configured, and in tests.
//! Counters live for the session only.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::catalog::Movie;

use super::error::TrendingError;
use super::types::{normalize_query, rank, TrendingEntry};
use super::TrendingStore;

pub struct InMemoryTrendingStore {
    image_base_url: String,
    /// Creation order; ranking sorts a copy.
    entries: Mutex<Vec<TrendingEntry>>,
}

impl InMemoryTrendingStore {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Number of distinct queries recorded.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl TrendingStore for InMemoryTrendingStore {
    async fn record_search(&self, query: &str, movie: &Movie) -> Result<(), TrendingError> {
        let key = normalize_query(query);
        let mut entries = self.entries.lock();
        match entries.iter_mut().find(|entry| entry.query == key) {
            Some(entry) => entry.count += 1,
            None => entries.push(TrendingEntry {
                id: uuid::Uuid::new_v4().to_string(),
                query: key,
                movie_id: movie.id,
                title: movie.title.clone(),
                poster_url: movie.poster_url(&self.image_base_url),
                count: 1,
            }),
        }
        Ok(())
    }

    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError> {
        let mut entries = self.entries.lock().clone();
        rank(&mut entries, limit);
        Ok(entries)
    }
}
