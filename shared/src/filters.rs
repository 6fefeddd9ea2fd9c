//! In-memory filter pipeline
//!
//! Each filter is a set of independent predicates that are ANDed together.
//! Inside one predicate a multi-value selection is an OR: an item passes when
//! it matches any selected value, and an empty selection passes everything.
//! Filtering never reorders its input and never fails; a criteria set that
//! nothing satisfies simply yields an empty result.

use std::collections::{BTreeSet, HashSet};

use crate::types::{Inquiry, InquiryStatus, JewelryCategory, JewelryItem, PriceBounds, Seller, StateData};

/// Predicate over one record type
pub trait Criteria<T> {
    /// Whether a single record passes every active predicate
    fn matches(&self, item: &T) -> bool;

    /// Borrowing filter, preserving input order
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Consuming filter, preserving input order
    fn select(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// Case-insensitive substring query. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// True when any of the fields contains the query
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.is_empty() || fields.into_iter().any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Multi-select over wire identifiers (category ids, state codes, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Selection(Vec<String>);

impl Selection {
    fn insert(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.0.contains(&value) {
            self.0.push(value);
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn allows(&self, value: &str) -> bool {
        self.is_empty() || self.0.iter().any(|selected| selected == value)
    }

    fn allows_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.is_empty() || values.into_iter().any(|value| self.0.iter().any(|s| s == value))
    }
}

/// Inclusive price window in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Tightest range covering every item, `None` when there are no items
    pub fn spanning(items: &[JewelryItem]) -> Option<Self> {
        let min = items.iter().map(|item| item.price).min()?;
        let max = items.iter().map(|item| item.price).max()?;
        Some(Self { min, max })
    }

    /// An inverted range (min above max) contains nothing
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl From<PriceRange> for PriceBounds {
    fn from(range: PriceRange) -> Self {
        PriceBounds {
            min: range.min,
            max: range.max,
        }
    }
}

/// Catalog filter: text, category, material and price
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JewelryFilter {
    query: TextQuery,
    categories: Selection,
    materials: Vec<String>,
    price: Option<PriceRange>,
}

impl JewelryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_category(self, category: JewelryCategory) -> Self {
        self.with_category_name(category.as_str())
    }

    /// Select a category by wire id. Unknown ids are kept and match no item.
    pub fn with_category_name(mut self, category: &str) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_material(mut self, material: &str) -> Self {
        if !self.materials.iter().any(|m| m == material) {
            self.materials.push(material.to_string());
        }
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price
    }

    /// Number of category and material chips currently selected
    pub fn selection_count(&self) -> usize {
        self.categories.len() + self.materials.len()
    }

    /// Whether anything differs from the unfiltered view. A price range equal
    /// to `default_range` does not count as active.
    pub fn is_active(&self, default_range: Option<PriceRange>) -> bool {
        !self.query.is_empty()
            || self.selection_count() > 0
            || self.price.is_some_and(|range| Some(range) != default_range)
    }

    fn matches_material(&self, material: &str) -> bool {
        self.materials.is_empty() || self.materials.iter().any(|selected| material.contains(selected.as_str()))
    }
}

impl Criteria<JewelryItem> for JewelryFilter {
    fn matches(&self, item: &JewelryItem) -> bool {
        self.query.matches_any([item.name.as_str(), item.description.as_str()])
            && self.categories.allows(item.category.as_str())
            && self.matches_material(&item.material)
            && self.price.is_none_or(|range| range.contains(item.price))
    }
}

/// Seller directory filter: text, state and specialty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerFilter {
    query: TextQuery,
    states: Selection,
    specialties: Selection,
}

impl SellerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_state(mut self, state_id: &str) -> Self {
        self.states.insert(state_id);
        self
    }

    pub fn with_specialty(mut self, specialty: &str) -> Self {
        self.specialties.insert(specialty);
        self
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.states.is_empty() || !self.specialties.is_empty()
    }
}

impl Criteria<Seller> for SellerFilter {
    fn matches(&self, seller: &Seller) -> bool {
        self.query.matches_any([
            seller.name.as_str(),
            seller.workshop_name.as_str(),
            seller.city.as_str(),
        ]) && self.states.allows(&seller.state)
            && self.specialties.allows_any(seller.specialties.iter().map(String::as_str))
    }
}

/// Dashboard inquiry filter: text and status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    query: TextQuery,
    statuses: Selection,
}

impl InquiryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_status(self, status: InquiryStatus) -> Self {
        self.with_status_name(status.as_str())
    }

    pub fn with_status_name(mut self, status: &str) -> Self {
        self.statuses.insert(status);
        self
    }
}

impl Criteria<Inquiry> for InquiryFilter {
    fn matches(&self, inquiry: &Inquiry) -> bool {
        self.query.matches_any([
            inquiry.id.as_str(),
            inquiry.customer.as_str(),
            inquiry.product.as_str(),
        ]) && self.statuses.allows(inquiry.status.as_str())
    }
}

/// Every specialty offered by any seller, sorted and deduplicated
pub fn distinct_specialties(sellers: &[Seller]) -> Vec<String> {
    sellers
        .iter()
        .flat_map(|seller| seller.specialties.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// States with at least one listed seller, in state order
pub fn states_with_sellers<'a>(states: &'a [StateData], sellers: &[Seller]) -> Vec<&'a StateData> {
    let occupied: HashSet<&str> = sellers.iter().map(|seller| seller.state.as_str()).collect();
    states.iter().filter(|state| occupied.contains(state.id.as_str())).collect()
}
