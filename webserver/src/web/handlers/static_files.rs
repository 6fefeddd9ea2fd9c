//! Static file serving handlers
//!
//! Serves a built storefront bundle when one is configured. Unknown paths
//! fall back to `index.html` so client-side routes resolve.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Directory service with single-page-app fallback
pub fn spa_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}

/// JSON 404 for paths no route or asset claims
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
