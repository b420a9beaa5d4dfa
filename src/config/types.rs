use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Movie catalog (TMDB-compatible) settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    /// Prefix joined with a movie's poster path to build its poster URL.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Bearer token for the catalog API. Overridden by `TMDB_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Trending store (Appwrite-compatible document API) settings.
///
/// When `project_id`, `database_id` or `collection_id` is empty the app
/// keeps trending counters in memory for the current session only.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingConfig {
    /// REST endpoint (e.g., "https://cloud.appwrite.io/v1").
    #[serde(default = "default_trending_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub database_id: String,
    #[serde(default)]
    pub collection_id: String,
    /// Server API key. Overridden by `APPWRITE_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Number of trending entries shown (default: 5).
    #[serde(default = "default_trending_limit")]
    pub limit: usize,
}

/// Search box behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is sent (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// UI tick interval, drives the spinner (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_catalog_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_trending_endpoint() -> String {
    "https://cloud.appwrite.io/v1".to_string()
}

fn default_trending_limit() -> usize {
    5
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            image_base_url: default_image_base_url(),
            api_key: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_trending_endpoint(),
            project_id: String::new(),
            database_id: String::new(),
            collection_id: String::new(),
            api_key: None,
            limit: default_trending_limit(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn masked(key: &Option<String>) -> Option<&'static str> {
    key.as_ref().map(|_| "••••••••")
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("api_key", &masked(&self.api_key))
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl std::fmt::Debug for TrendingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendingConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("database_id", &self.database_id)
            .field("collection_id", &self.collection_id)
            .field("api_key", &masked(&self.api_key))
            .field("limit", &self.limit)
            .finish()
    }
}

impl TrendingConfig {
    /// True when enough is configured to talk to the remote document store.
    pub fn is_remote(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.project_id.is_empty()
            && !self.database_id.is_empty()
            && !self.collection_id.is_empty()
    }
}
