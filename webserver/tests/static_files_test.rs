//! Storefront bundle serving

mod common;

use axum::http::StatusCode;
use common::{get_json, get_text};
use jewel_webserver::{MemoryStore, ServerConfig, WebServer};
use std::fs;
use tempfile::TempDir;

fn storefront() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<!doctype html><div id=\"root\"></div>").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("app.js"), "console.log('jewel');").unwrap();
    dir
}

fn router_for(dir: &TempDir) -> axum::Router {
    let config = ServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..ServerConfig::local(0)
    };
    WebServer::new(&config, MemoryStore::new()).build_router()
}

#[tokio::test]
async fn test_assets_are_served() {
    let dir = storefront();

    let (status, body) = get_text(router_for(&dir), "/assets/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('jewel');");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = storefront();

    for path in ["/", "/catalog", "/seller/s1", "/dashboard"] {
        let (status, body) = get_text(router_for(&dir), path).await;
        assert_eq!(status, StatusCode::OK, "path {path}");
        assert!(body.contains("id=\"root\""), "path {path}");
    }
}

#[tokio::test]
async fn test_api_still_wins_over_storefront() {
    let dir = storefront();

    let (status, body) = get_json(router_for(&dir), "/api/sellers/s6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Jaipur");

    let (status, body) = get_json(router_for(&dir), "/api/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}
