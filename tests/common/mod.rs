//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use marquee::catalog::{CatalogError, Movie, MovieCatalog};
use marquee::config::{CatalogConfig, TrendingConfig};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-token".to_string()),
        ..CatalogConfig::default()
    }
}

pub fn trending_config(endpoint: &str) -> TrendingConfig {
    TrendingConfig {
        endpoint: endpoint.to_string(),
        project_id: "proj".to_string(),
        database_id: "db".to_string(),
        collection_id: "metrics".to_string(),
        api_key: Some("store-key".to_string()),
        ..TrendingConfig::default()
    }
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{id}.jpg")),
        popularity: 10.0,
        vote_average: Some(7.0),
        original_language: Some("en".to_string()),
        release_date: Some("2001-01-01".to_string()),
        overview: None,
    }
}

/// Catalog double that answers from a fixed list and records every query.
pub struct FakeCatalog {
    movies: Vec<Movie>,
    fail_with: Option<String>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn returning(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            movies,
            fail_with: None,
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            movies: Vec::new(),
            fail_with: Some(message.to_string()),
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        self.queries.lock().push(query.to_string());
        match &self.fail_with {
            Some(message) => Err(CatalogError::Domain {
                message: message.clone(),
            }),
            None => Ok(self.movies.clone()),
        }
    }
}
