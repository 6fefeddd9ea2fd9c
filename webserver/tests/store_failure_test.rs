//! Handler behavior against a mocked catalog store

mod common;

use axum::http::StatusCode;
use common::{get_json, router_with};
use jewel_shared::Dataset;
use jewel_webserver::WebServerError;
use jewel_webserver::traits::MockCatalogStore;
use serde_json::json;

fn storage_failure<T>() -> Result<T, WebServerError> {
    Err(WebServerError::Storage("connection reset".to_string()))
}

#[tokio::test]
async fn test_store_failure_maps_to_500() {
    let mut store = MockCatalogStore::new();
    store.expect_all_states().times(1).returning(|| storage_failure());

    let (status, body) = get_json(router_with(store), "/api/states").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch states" }));
}

#[tokio::test]
async fn test_store_details_are_not_leaked() {
    let mut store = MockCatalogStore::new();
    store.expect_seller_by_id().returning(|_| storage_failure());

    let (status, body) = get_json(router_with(store), "/api/sellers/s1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch seller");
    assert!(!body.to_string().contains("connection reset"));
}

#[tokio::test]
async fn test_single_state_query_uses_state_lookup() {
    let seed = Dataset::seed();
    let karnataka: Vec<_> = seed.sellers.iter().filter(|s| s.state == "KA").cloned().collect();

    let mut store = MockCatalogStore::new();
    store
        .expect_sellers_by_state()
        .withf(|state| state == "KA")
        .times(1)
        .returning(move |_| Ok(karnataka.clone()));
    store.expect_all_sellers().never();

    let (status, body) = get_json(router_with(store), "/api/sellers?state=KA").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "s5");
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_single_category_query_uses_category_lookup() {
    let seed = Dataset::seed();
    let all = seed.jewelry.clone();
    let pendants: Vec<_> = seed.jewelry.iter().filter(|j| j.id == "j6").cloned().collect();

    let mut store = MockCatalogStore::new();
    store.expect_all_jewelry_items().returning(move || Ok(all.clone()));
    store
        .expect_jewelry_items_by_category()
        .withf(|category| category.as_str() == "pendants")
        .times(1)
        .returning(move |_| Ok(pendants.clone()));

    let (status, body) = get_json(router_with(store), "/api/jewelry?category=pendants").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([seed.jewelry[5]]));
}

#[tokio::test]
async fn test_empty_catalog_has_no_price_range() {
    let mut store = MockCatalogStore::new();
    store.expect_all_jewelry_items().returning(|| Ok(Vec::new()));

    let (status, body) = get_json(router_with(store), "/api/catalog/price-range").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Price range not found");
}
