//! Movie catalog access.
//!
//! [`MovieCatalog`] is the seam the controller talks to; [`CatalogClient`]
//! is the HTTP implementation against a TMDB-compatible API.

mod client;
mod error;
mod types;

use async_trait::async_trait;

pub use client::{CatalogClient, CatalogRequest};
pub use error::{CatalogError, DOMAIN_FALLBACK_ERROR, GENERIC_FETCH_ERROR};
pub use types::Movie;

/// Source of movie listings.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search for `query`, or list popular movies when it is blank.
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;
}
