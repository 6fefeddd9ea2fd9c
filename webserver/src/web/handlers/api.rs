//! REST API handlers
//!
//! Each handler reads from the catalog store, applies any query-string
//! filters and serializes the result. Misses become 404s; store failures
//! become 500s with a generic "Failed to fetch" message.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use jewel_shared::{
    CategoryInfo, Criteria, DashboardCategory, Inquiry, JewelryCategory, JewelryItem, MATERIALS, PriceBounds,
    PriceRange, Seller, StateData, Workshop, distinct_specialties, states_with_sellers,
};

use crate::error::{WebServerError, WebServerResult};
use crate::state::ApiState;
use crate::traits::CatalogStore;
use crate::types::{ApiQuery, HealthStatus, InquiriesQuery, JewelryQuery, SellersQuery, StatesQuery};

/// Health check endpoint - /health
pub async fn health_check<S>(State(api): State<ApiState<S>>) -> Json<HealthStatus>
where
    S: CatalogStore,
{
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp(),
        uptime: api.server.get_uptime_seconds(),
        requests_served: api.server.requests_served(),
    })
}

/// List map states - /api/states
pub async fn list_states<S>(
    State(api): State<ApiState<S>>,
    ApiQuery(query): ApiQuery<StatesQuery>,
) -> WebServerResult<Json<Vec<StateData>>>
where
    S: CatalogStore,
{
    let states = api.store.all_states().await.map_err(WebServerError::fetching("states"))?;
    if !query.has_sellers {
        return Ok(Json(states));
    }

    let sellers = api.store.all_sellers().await.map_err(WebServerError::fetching("states"))?;
    let occupied = states_with_sellers(&states, &sellers).into_iter().cloned().collect();
    Ok(Json(occupied))
}

/// Single state - /api/states/:id
pub async fn get_state<S>(State(api): State<ApiState<S>>, Path(id): Path<String>) -> WebServerResult<Json<StateData>>
where
    S: CatalogStore,
{
    api.store
        .state_by_id(&id)
        .await
        .map_err(WebServerError::fetching("state"))?
        .map(Json)
        .ok_or(WebServerError::not_found("State"))
}

/// Sellers located in a state - /api/states/:id/sellers
pub async fn list_state_sellers<S>(
    State(api): State<ApiState<S>>,
    Path(id): Path<String>,
) -> WebServerResult<Json<Vec<Seller>>>
where
    S: CatalogStore,
{
    let sellers = api
        .store
        .sellers_by_state(&id)
        .await
        .map_err(WebServerError::fetching("sellers for state"))?;
    Ok(Json(sellers))
}

/// Seller directory - /api/sellers?state=&specialty=&q=
pub async fn list_sellers<S>(
    State(api): State<ApiState<S>>,
    ApiQuery(query): ApiQuery<SellersQuery>,
) -> WebServerResult<Json<Vec<Seller>>>
where
    S: CatalogStore,
{
    let sellers = match query.state.as_deref() {
        Some(state) if !state.is_empty() => api.store.sellers_by_state(state).await,
        _ => api.store.all_sellers().await,
    }
    .map_err(WebServerError::fetching("sellers"))?;

    Ok(Json(query.to_filter().select(sellers)))
}

/// Single seller - /api/sellers/:id
pub async fn get_seller<S>(State(api): State<ApiState<S>>, Path(id): Path<String>) -> WebServerResult<Json<Seller>>
where
    S: CatalogStore,
{
    api.store
        .seller_by_id(&id)
        .await
        .map_err(WebServerError::fetching("seller"))?
        .map(Json)
        .ok_or(WebServerError::not_found("Seller"))
}

/// Workshop profile of a seller - /api/sellers/:id/workshop
pub async fn get_seller_workshop<S>(
    State(api): State<ApiState<S>>,
    Path(id): Path<String>,
) -> WebServerResult<Json<Workshop>>
where
    S: CatalogStore,
{
    api.store
        .workshop_by_seller_id(&id)
        .await
        .map_err(WebServerError::fetching("workshop"))?
        .map(Json)
        .ok_or(WebServerError::not_found("Workshop"))
}

/// Distinct seller specialties - /api/specialties
pub async fn list_specialties<S>(State(api): State<ApiState<S>>) -> WebServerResult<Json<Vec<String>>>
where
    S: CatalogStore,
{
    let sellers = api.store.all_sellers().await.map_err(WebServerError::fetching("specialties"))?;
    Ok(Json(distinct_specialties(&sellers)))
}

/// Product catalog - /api/jewelry?category=&q=&material=&minPrice=&maxPrice=
pub async fn list_jewelry<S>(
    State(api): State<ApiState<S>>,
    ApiQuery(query): ApiQuery<JewelryQuery>,
) -> WebServerResult<Json<Vec<JewelryItem>>>
where
    S: CatalogStore,
{
    let all_items = api
        .store
        .all_jewelry_items()
        .await
        .map_err(WebServerError::fetching("jewelry items"))?;
    let bounds = PriceRange::spanning(&all_items).map(PriceBounds::from);

    // A single known category narrows at the store, like the catalog page link
    let items = match query.category.as_deref().map(str::parse::<JewelryCategory>) {
        Some(Ok(category)) => api
            .store
            .jewelry_items_by_category(category)
            .await
            .map_err(WebServerError::fetching("jewelry items"))?,
        _ => all_items,
    };

    Ok(Json(query.to_filter(bounds).select(items)))
}

/// Single catalog item - /api/jewelry/:id
pub async fn get_jewelry_item<S>(
    State(api): State<ApiState<S>>,
    Path(id): Path<String>,
) -> WebServerResult<Json<JewelryItem>>
where
    S: CatalogStore,
{
    api.store
        .jewelry_item_by_id(&id)
        .await
        .map_err(WebServerError::fetching("jewelry item"))?
        .map(Json)
        .ok_or(WebServerError::not_found("Jewelry item"))
}

/// Catalog categories - /api/catalog/categories
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(JewelryCategory::ALL.iter().map(JewelryCategory::info).collect())
}

/// Selectable materials - /api/catalog/materials
pub async fn list_materials() -> Json<Vec<&'static str>> {
    Json(MATERIALS.to_vec())
}

/// Catalog price extremes - /api/catalog/price-range
pub async fn get_price_range<S>(State(api): State<ApiState<S>>) -> WebServerResult<Json<PriceBounds>>
where
    S: CatalogStore,
{
    let items = api
        .store
        .all_jewelry_items()
        .await
        .map_err(WebServerError::fetching("price range"))?;
    let range = PriceRange::spanning(&items).ok_or(WebServerError::not_found("Price range"))?;
    Ok(Json(range.into()))
}

/// Dashboard inquiries - /api/dashboard/inquiries?q=&status=
pub async fn list_inquiries<S>(
    State(api): State<ApiState<S>>,
    ApiQuery(query): ApiQuery<InquiriesQuery>,
) -> WebServerResult<Json<Vec<Inquiry>>>
where
    S: CatalogStore,
{
    let inquiries = api.store.all_inquiries().await.map_err(WebServerError::fetching("inquiries"))?;
    Ok(Json(query.to_filter().select(inquiries)))
}

/// Dashboard catalog groupings - /api/dashboard/categories
pub async fn list_dashboard_categories<S>(
    State(api): State<ApiState<S>>,
) -> WebServerResult<Json<Vec<DashboardCategory>>>
where
    S: CatalogStore,
{
    let categories = api
        .store
        .dashboard_categories()
        .await
        .map_err(WebServerError::fetching("categories"))?;
    Ok(Json(categories))
}
