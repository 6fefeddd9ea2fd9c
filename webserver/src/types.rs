//! Query-string types accepted by the API
//!
//! Multi-value parameters (`category`, `material`, `status`) are comma
//! separated (`?category=rings,bangles`).
//! Parameters that are absent leave the corresponding predicate inactive.

use axum::extract::{FromRequestParts, Query};
use jewel_shared::{InquiryFilter, JewelryFilter, PriceBounds, PriceRange, SellerFilter};
use serde::{Deserialize, Serialize};

use crate::error::WebServerError;

/// Query-string extractor whose rejections use the JSON error body
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(WebServerError))]
pub struct ApiQuery<T>(pub T);

/// Split a comma-separated parameter, dropping empty segments
pub fn split_list(raw: Option<&str>) -> Vec<&str> {
    raw.map(|value| value.split(',').map(str::trim).filter(|part| !part.is_empty()).collect())
        .unwrap_or_default()
}

/// `GET /api/states`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatesQuery {
    /// Only states with at least one listed seller
    #[serde(default)]
    pub has_sellers: bool,
}

/// `GET /api/sellers`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellersQuery {
    pub state: Option<String>,
    pub specialty: Option<String>,
    pub q: Option<String>,
}

impl SellersQuery {
    pub fn to_filter(&self) -> SellerFilter {
        let mut filter = SellerFilter::new();
        if let Some(q) = &self.q {
            filter = filter.with_query(q);
        }
        if let Some(state) = self.state.as_deref().filter(|s| !s.is_empty()) {
            filter = filter.with_state(state);
        }
        if let Some(specialty) = self.specialty.as_deref().filter(|s| !s.is_empty()) {
            filter = filter.with_specialty(specialty);
        }
        filter
    }
}

/// `GET /api/jewelry`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JewelryQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub material: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

impl JewelryQuery {
    /// Build the catalog filter. A missing price bound falls back to the
    /// catalog's own extreme from `bounds`.
    pub fn to_filter(&self, bounds: Option<PriceBounds>) -> JewelryFilter {
        let mut filter = JewelryFilter::new();
        if let Some(q) = &self.q {
            filter = filter.with_query(q);
        }
        for category in split_list(self.category.as_deref()) {
            filter = filter.with_category_name(category);
        }
        for material in split_list(self.material.as_deref()) {
            filter = filter.with_material(material);
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let min = self.min_price.or(bounds.map(|b| b.min)).unwrap_or(0);
            let max = self.max_price.or(bounds.map(|b| b.max)).unwrap_or(u64::MAX);
            filter = filter.with_price_range(PriceRange::new(min, max));
        }
        filter
    }
}

/// `GET /api/dashboard/inquiries`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiriesQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

impl InquiriesQuery {
    pub fn to_filter(&self) -> InquiryFilter {
        let mut filter = InquiryFilter::new();
        if let Some(q) = &self.q {
            filter = filter.with_query(q);
        }
        for status in split_list(self.status.as_deref()) {
            filter = filter.with_status_name(status);
        }
        filter
    }
}

/// `GET /health` response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: i64,
    pub uptime: u64,
    pub requests_served: u64,
}
