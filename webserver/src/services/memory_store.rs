//! In-memory catalog store
//!
//! Serves the static seed dataset. Every lookup is a linear scan; the
//! catalog holds a few dozen records and never changes at runtime.

use async_trait::async_trait;
use jewel_shared::{
    Dataset, DashboardCategory, Inquiry, JewelryCategory, JewelryItem, Seller, StateData, Workshop,
    logging::Component,
};
use std::sync::Arc;

use crate::error::WebServerResult;
use crate::traits::CatalogStore;

/// Catalog store backed by an immutable [`Dataset`]
#[derive(Debug, Clone)]
pub struct MemoryStore {
    dataset: Arc<Dataset>,
}

impl MemoryStore {
    /// Store over the built-in seed data
    pub fn new() -> Self {
        Self::with_dataset(Dataset::build_seed())
    }

    /// Store over a caller-supplied dataset
    pub fn with_dataset(dataset: Dataset) -> Self {
        jewel_shared::component_debug!(
            Component::Store,
            states = dataset.states.len(),
            sellers = dataset.sellers.len(),
            items = dataset.jewelry.len(),
            "📦 Catalog loaded"
        );
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn all_states(&self) -> WebServerResult<Vec<StateData>> {
        Ok(self.dataset.states.clone())
    }

    async fn state_by_id(&self, id: &str) -> WebServerResult<Option<StateData>> {
        Ok(self.dataset.states.iter().find(|s| s.id == id).cloned())
    }

    async fn all_sellers(&self) -> WebServerResult<Vec<Seller>> {
        Ok(self.dataset.sellers.clone())
    }

    async fn seller_by_id(&self, id: &str) -> WebServerResult<Option<Seller>> {
        Ok(self.dataset.sellers.iter().find(|s| s.id == id).cloned())
    }

    async fn sellers_by_state(&self, state_id: &str) -> WebServerResult<Vec<Seller>> {
        Ok(self
            .dataset
            .sellers
            .iter()
            .filter(|s| s.state == state_id)
            .cloned()
            .collect())
    }

    async fn workshop_by_seller_id(&self, seller_id: &str) -> WebServerResult<Option<Workshop>> {
        Ok(self
            .dataset
            .workshops
            .iter()
            .find(|w| w.seller_id == seller_id)
            .cloned())
    }

    async fn all_jewelry_items(&self) -> WebServerResult<Vec<JewelryItem>> {
        Ok(self.dataset.jewelry.clone())
    }

    async fn jewelry_item_by_id(&self, id: &str) -> WebServerResult<Option<JewelryItem>> {
        Ok(self.dataset.jewelry.iter().find(|j| j.id == id).cloned())
    }

    async fn jewelry_items_by_category(&self, category: JewelryCategory) -> WebServerResult<Vec<JewelryItem>> {
        Ok(self
            .dataset
            .jewelry
            .iter()
            .filter(|j| j.category == category)
            .cloned()
            .collect())
    }

    async fn all_inquiries(&self) -> WebServerResult<Vec<Inquiry>> {
        Ok(self.dataset.inquiries.clone())
    }

    async fn dashboard_categories(&self) -> WebServerResult<Vec<DashboardCategory>> {
        Ok(self.dataset.dashboard_categories.clone())
    }
}
