use thiserror::Error;

/// Failures talking to the trending store. Never shown to the user.
#[derive(Debug, Error)]
pub enum TrendingError {
    #[error("Trending store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Trending store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed trending store response: {0}")]
    Parse(String),

    #[error("Trending store not configured: {0}")]
    NotConfigured(String),
}
