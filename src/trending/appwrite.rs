//! Trending store backed by an Appwrite-compatible document API.
//!
//! Each document holds `{searchTerm, count, movie_id, title, poster_url}`.
//! Increment is find-then-create-or-update; concurrent writers from other
//! sessions are left to the backend.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Movie;
use crate::config::{appwrite_headers, AuthHeader, TrendingConfig};

use super::error::TrendingError;
use super::types::{normalize_query, TrendingEntry};
use super::TrendingStore;

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "searchTerm", default)]
    search_term: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    movie_id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster_url: Option<String>,
}

impl From<Document> for TrendingEntry {
    fn from(doc: Document) -> Self {
        TrendingEntry {
            id: doc.id,
            query: doc.search_term,
            movie_id: doc.movie_id,
            title: doc.title,
            poster_url: doc.poster_url.filter(|url| !url.is_empty()),
            count: doc.count,
        }
    }
}

pub struct AppwriteTrendingStore {
    client: Client,
    documents_url: String,
    headers: Vec<AuthHeader>,
    image_base_url: String,
}

impl AppwriteTrendingStore {
    pub fn new(config: &TrendingConfig, image_base_url: &str) -> Result<Self, TrendingError> {
        if !config.is_remote() {
            return Err(TrendingError::NotConfigured(
                "endpoint, project_id, database_id and collection_id are required".to_string(),
            ));
        }
        let documents_url = format!(
            "{}/databases/{}/collections/{}/documents",
            config.endpoint.trim_end_matches('/'),
            config.database_id,
            config.collection_id
        );
        Ok(Self {
            client: Client::builder().build()?,
            documents_url,
            headers: appwrite_headers(&config.project_id, &config.resolve_credential()),
            image_base_url: image_base_url.to_string(),
        })
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        self.headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()))
    }

    async fn list(&self, queries: &[Value]) -> Result<Vec<Document>, TrendingError> {
        let params = queries.iter().map(|q| ("queries[]", q.to_string()));
        let url = Url::parse_with_params(&self.documents_url, params)
            .map_err(|e| TrendingError::NotConfigured(format!("invalid endpoint: {e}")))?;

        let response = self.request(self.client.get(url)).send().await?;
        let list: DocumentList = read_json(response).await?;
        Ok(list.documents)
    }

    async fn create(&self, query: String, movie: &Movie) -> Result<(), TrendingError> {
        let body = json!({
            "documentId": uuid::Uuid::new_v4().simple().to_string(),
            "data": {
                "searchTerm": query,
                "count": 1,
                "movie_id": movie.id,
                "title": movie.title,
                "poster_url": movie.poster_url(&self.image_base_url).unwrap_or_default(),
            }
        });
        let response = self
            .request(self.client.post(&self.documents_url))
            .json(&body)
            .send()
            .await?;
        read_json::<Value>(response).await.map(|_| ())
    }

    async fn set_count(&self, id: &str, count: u64) -> Result<(), TrendingError> {
        let url = format!("{}/{}", self.documents_url, id);
        let response = self
            .request(self.client.patch(url))
            .json(&json!({ "data": { "count": count } }))
            .send()
            .await?;
        read_json::<Value>(response).await.map(|_| ())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TrendingError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(TrendingError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    serde_json::from_str(&text).map_err(|e| TrendingError::Parse(e.to_string()))
}

#[async_trait]
impl TrendingStore for AppwriteTrendingStore {
    async fn record_search(&self, query: &str, movie: &Movie) -> Result<(), TrendingError> {
        let key = normalize_query(query);
        let existing = self
            .list(&[
                json!({ "method": "equal", "attribute": "searchTerm", "values": [key] }),
                json!({ "method": "limit", "values": [1] }),
            ])
            .await?;

        match existing.into_iter().next() {
            Some(doc) => {
                tracing::debug!(query = %key, count = doc.count + 1, "Incrementing trending entry");
                self.set_count(&doc.id, doc.count + 1).await
            }
            None => {
                tracing::debug!(query = %key, movie_id = movie.id, "Creating trending entry");
                self.create(key, movie).await
            }
        }
    }

    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError> {
        let documents = self
            .list(&[
                json!({ "method": "orderDesc", "attribute": "count" }),
                json!({ "method": "orderAsc", "attribute": "$createdAt" }),
                json!({ "method": "limit", "values": [limit] }),
            ])
            .await?;
        let mut entries: Vec<TrendingEntry> = documents.into_iter().map(Into::into).collect();
        entries.truncate(limit);
        Ok(entries)
    }
}
