//! Error types for catalog requests.

use thiserror::Error;

/// Message shown for every transport-class failure.
pub const GENERIC_FETCH_ERROR: &str = "Error fetching movies, please try again later.";

/// Fallback when the server flags a failure without a message.
pub const DOMAIN_FALLBACK_ERROR: &str = "Failed to fetch movies";

/// Errors that can occur while fetching movies.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request could not be built or sent, or the body could not be read.
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Catalog answered with a non-success status.
    #[error("Catalog returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON.
    #[error("Malformed catalog response: {0}")]
    Parse(String),

    /// Catalog URL could not be built from the configured base.
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Catalog answered 200 but flagged a logical failure.
    #[error("Catalog reported failure: {message}")]
    Domain { message: String },
}

impl CatalogError {
    /// Text shown in place of the results.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Domain { message } => message.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }

    /// Short classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "transport",
            CatalogError::Status { .. } => "status",
            CatalogError::Parse(_) => "parse",
            CatalogError::InvalidUrl { .. } => "invalid_url",
            CatalogError::Domain { .. } => "domain",
        }
    }
}
