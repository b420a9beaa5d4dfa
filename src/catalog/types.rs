use serde::{Deserialize, Serialize};

/// A movie as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Full poster URL under `image_base_url`, if the movie has a poster.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| {
                format!(
                    "{}/{}",
                    image_base_url.trim_end_matches('/'),
                    path.trim_start_matches('/')
                )
            })
    }

    /// Year part of `release_date` ("2008-07-16" -> "2008").
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

/// Raw catalog response body.
///
/// Besides `results`, the body may carry a failure flag in either of
/// two shapes: `{"response": "False", "error": ...}` or
/// `{"success": false, "status_message": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl CatalogResponse {
    /// Server-side failure, with the message the server provided (if any).
    pub fn failure(&self) -> Option<Option<&str>> {
        if self.response.as_deref() == Some("False") {
            return Some(self.error.as_deref());
        }
        if self.success == Some(false) {
            return Some(self.status_message.as_deref());
        }
        None
    }
}
