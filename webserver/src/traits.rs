//! Service trait definitions for dependency injection
//!
//! Catalog access goes through [`CatalogStore`] so handlers can be exercised
//! against a mock in tests.

use async_trait::async_trait;
use jewel_shared::{DashboardCategory, Inquiry, JewelryCategory, JewelryItem, Seller, StateData, Workshop};

use crate::error::WebServerResult;

/// Read-only access to the marketplace catalog
#[mockall::automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All map states in seed order
    async fn all_states(&self) -> WebServerResult<Vec<StateData>>;

    /// State by two-letter code
    async fn state_by_id(&self, id: &str) -> WebServerResult<Option<StateData>>;

    async fn all_sellers(&self) -> WebServerResult<Vec<Seller>>;

    async fn seller_by_id(&self, id: &str) -> WebServerResult<Option<Seller>>;

    /// Sellers located in the given state; empty for unknown states
    async fn sellers_by_state(&self, state_id: &str) -> WebServerResult<Vec<Seller>>;

    /// First workshop that belongs to the seller
    async fn workshop_by_seller_id(&self, seller_id: &str) -> WebServerResult<Option<Workshop>>;

    async fn all_jewelry_items(&self) -> WebServerResult<Vec<JewelryItem>>;

    async fn jewelry_item_by_id(&self, id: &str) -> WebServerResult<Option<JewelryItem>>;

    async fn jewelry_items_by_category(&self, category: JewelryCategory) -> WebServerResult<Vec<JewelryItem>>;

    /// Customer inquiries shown on the seller dashboard
    async fn all_inquiries(&self) -> WebServerResult<Vec<Inquiry>>;

    /// Catalog groupings shown on the seller dashboard
    async fn dashboard_categories(&self) -> WebServerResult<Vec<DashboardCategory>>;
}
