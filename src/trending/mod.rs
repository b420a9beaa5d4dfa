//! Trending searches: a per-query counter kept outside the catalog.

mod appwrite;
mod error;
mod memory;
mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::Movie;
use crate::config::Config;

pub use appwrite::AppwriteTrendingStore;
pub use error::TrendingError;
pub use memory::InMemoryTrendingStore;
pub use types::{normalize_query, TrendingEntry};

/// Storage for trending search counters.
#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Count one search for `query`, creating its entry from `movie` on first use.
    async fn record_search(&self, query: &str, movie: &Movie) -> Result<(), TrendingError>;

    /// Up to `limit` entries, most searched first.
    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError>;
}

/// Remote store when configured, otherwise a session-local one.
pub fn store_from_config(config: &Config) -> Arc<dyn TrendingStore> {
    let image_base_url = &config.catalog.image_base_url;
    if config.trending.is_remote() {
        match AppwriteTrendingStore::new(&config.trending, image_base_url) {
            Ok(store) => return Arc::new(store),
            Err(err) => tracing::warn!(error = %err, "Falling back to in-memory trending store"),
        }
    } else {
        tracing::info!("Trending store not configured; counting searches for this session only");
    }
    Arc::new(InMemoryTrendingStore::new(image_base_url.clone()))
}
