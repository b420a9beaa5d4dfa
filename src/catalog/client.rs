//! HTTP client for the TMDB-compatible movie catalog.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::{bearer_header, AuthHeader, CatalogConfig};

use super::error::{CatalogError, DOMAIN_FALLBACK_ERROR};
use super::types::{CatalogResponse, Movie};
use super::MovieCatalog;

/// The two catalog requests the app issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Text search.
    Search { query: String },
    /// Popular movies, most popular first.
    Discover,
}

impl CatalogRequest {
    /// Blank queries fall back to discover.
    pub fn for_query(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            CatalogRequest::Discover
        } else {
            CatalogRequest::Search {
                query: query.to_string(),
            }
        }
    }

    /// Absolute URL under `base_url`, with parameters URL-encoded.
    pub fn url(&self, base_url: &str) -> Result<Url, CatalogError> {
        let base = base_url.trim_end_matches('/');
        let (endpoint, params) = match self {
            CatalogRequest::Search { query } => {
                (format!("{base}/search/movie"), vec![("query", query.as_str())])
            }
            CatalogRequest::Discover => (
                format!("{base}/discover/movie"),
                vec![("sort_by", "popularity.desc")],
            ),
        };
        Url::parse_with_params(&endpoint, params).map_err(|e| CatalogError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })
    }
}

/// Catalog client built from an explicit [`CatalogConfig`].
pub struct CatalogClient {
    client: Client,
    base_url: String,
    auth: Option<AuthHeader>,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        let auth = bearer_header(&config.resolve_credential());
        if auth.is_none() {
            tracing::warn!("No catalog API key configured; requests will be unauthenticated");
        }

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            auth,
        })
    }

    async fn send(&self, request: &CatalogRequest) -> Result<Vec<Movie>, CatalogError> {
        let url = request.url(&self.base_url)?;
        tracing::debug!(url = %url, "Sending catalog request");

        let mut builder = self.client.get(url).header(ACCEPT, "application/json");
        if let Some((name, value)) = &self.auth {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        parse_body(&text)
    }
}

/// Interpret a 2xx catalog body.
pub(crate) fn parse_body(text: &str) -> Result<Vec<Movie>, CatalogError> {
    let body: CatalogResponse =
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if let Some(message) = body.failure() {
        return Err(CatalogError::Domain {
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or(DOMAIN_FALLBACK_ERROR)
                .to_string(),
        });
    }

    Ok(body.results.unwrap_or_default())
}

#[async_trait]
impl MovieCatalog for CatalogClient {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let request = CatalogRequest::for_query(query);
        let result = self.send(&request).await;
        match &result {
            Ok(movies) => tracing::debug!(count = movies.len(), "Catalog request succeeded"),
            Err(err) => tracing::error!(kind = err.kind(), error = %err, "Error fetching movies"),
        }
        result
    }
}
