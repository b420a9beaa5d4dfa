//! Appwrite-backed trending store against a mock document API.

mod common;

use common::mock_server::{CapturedRequest, MockResponse, MockServer};
use common::{movie, trending_config, IMAGE_BASE};
use marquee::trending::{AppwriteTrendingStore, TrendingError, TrendingStore};
use serde_json::{json, Value};

const DOCUMENTS_PATH: &str = "/databases/db/collections/metrics/documents";

fn store(server: &MockServer) -> AppwriteTrendingStore {
    AppwriteTrendingStore::new(&trending_config(&server.base_url()), IMAGE_BASE).unwrap()
}

fn queries(request: &CapturedRequest) -> Vec<Value> {
    request
        .query_pairs()
        .into_iter()
        .filter(|(key, _)| key == "queries[]")
        .map(|(_, value)| serde_json::from_str(&value).unwrap())
        .collect()
}

#[tokio::test]
async fn list_trending_orders_by_count_with_limit() {
    let server = MockServer::start().await;
    server
        .enqueue(MockResponse::json(
            r#"{"total": 2, "documents": [
                {"$id": "a", "searchTerm": "heat", "count": 9, "movie_id": 949,
                 "title": "Heat", "poster_url": "https://img/heat.jpg"},
                {"$id": "b", "searchTerm": "alien", "count": 4, "movie_id": 348,
                 "title": "Alien", "poster_url": ""}
            ]}"#,
        ))
        .await;

    let entries = store(&server).list_trending(5).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Heat");
    assert_eq!(entries[0].count, 9);
    assert_eq!(entries[0].poster_url.as_deref(), Some("https://img/heat.jpg"));
    assert_eq!(entries[1].poster_url, None);

    let request = &server.captured_requests().await[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, DOCUMENTS_PATH);
    assert_eq!(request.header("x-appwrite-project"), Some("proj"));
    assert_eq!(request.header("x-appwrite-key"), Some("store-key"));
    assert_eq!(
        queries(request),
        vec![
            json!({"method": "orderDesc", "attribute": "count"}),
            json!({"method": "orderAsc", "attribute": "$createdAt"}),
            json!({"method": "limit", "values": [5]}),
        ]
    );
}

#[tokio::test]
async fn first_search_creates_document_with_snapshot() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::json(r#"{"total": 0, "documents": []}"#)).await;
    server.enqueue(MockResponse::json(r#"{"$id": "new"}"#)).await;

    store(&server)
        .record_search("  Batman ", &movie(268, "Batman"))
        .await
        .unwrap();

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(
        queries(&requests[0]),
        vec![
            json!({"method": "equal", "attribute": "searchTerm", "values": ["batman"]}),
            json!({"method": "limit", "values": [1]}),
        ]
    );

    let create = &requests[1];
    assert_eq!(create.method, "POST");
    assert_eq!(create.path, DOCUMENTS_PATH);
    let body = create.json();
    assert!(body["documentId"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(
        body["data"],
        json!({
            "searchTerm": "batman",
            "count": 1,
            "movie_id": 268,
            "title": "Batman",
            "poster_url": "https://image.tmdb.org/t/p/w500/268.jpg",
        })
    );
}

#[tokio::test]
async fn repeat_search_increments_count_only() {
    let server = MockServer::start().await;
    server
        .enqueue(MockResponse::json(
            r#"{"total": 1, "documents": [
                {"$id": "d1", "searchTerm": "batman", "count": 3, "movie_id": 268,
                 "title": "Batman", "poster_url": "https://img/old.jpg"}
            ]}"#,
        ))
        .await;
    server.enqueue(MockResponse::json(r#"{"$id": "d1"}"#)).await;

    store(&server)
        .record_search("batman", &movie(999, "Batman Begins"))
        .await
        .unwrap();

    let requests = server.captured_requests().await;
    let update = &requests[1];
    assert_eq!(update.method, "PATCH");
    assert_eq!(update.path, format!("{DOCUMENTS_PATH}/d1"));
    assert_eq!(update.json(), json!({"data": {"count": 4}}));
}

#[tokio::test]
async fn backend_error_is_reported() {
    let server = MockServer::start().await;
    server
        .enqueue(MockResponse::status(401, r#"{"message": "missing scope"}"#))
        .await;

    let err = store(&server).list_trending(5).await.unwrap_err();
    assert!(matches!(err, TrendingError::Status { status: 401, .. }));
}
