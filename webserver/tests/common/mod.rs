//! Common test utilities for webserver integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use jewel_webserver::{CatalogStore, MemoryStore, ServerConfig, WebServer};
use serde_json::Value;
use tower::ServiceExt;

/// Router over the built-in seed catalog
pub fn seed_router() -> Router {
    router_with(MemoryStore::new())
}

/// Router over any catalog store
pub fn router_with<S>(store: S) -> Router
where
    S: CatalogStore + 'static,
{
    WebServer::new(&ServerConfig::local(0), store).build_router()
}

/// Issue a GET and decode the JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Issue a GET and return status plus raw body text
pub async fn get_text(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Ids of a JSON array of records, in response order
pub fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("response body is a JSON array")
        .iter()
        .map(|record| record["id"].as_str().expect("record has a string id").to_string())
        .collect()
}
