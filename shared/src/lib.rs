//! Shared domain types for the Jewel India marketplace
//!
//! Holds the catalog records, the static seed dataset and the in-memory
//! filter pipeline. Everything here is pure and synchronous; the HTTP layer
//! lives in the webserver crate.

pub mod dataset;
pub mod errors;
pub mod filters;
pub mod format;
pub mod logging;
pub mod types;

pub use types::*;
pub use errors::*;

pub use dataset::Dataset;
pub use filters::{
    Criteria, InquiryFilter, JewelryFilter, PriceRange, SellerFilter, TextQuery,
    distinct_specialties, states_with_sellers,
};
pub use format::format_price;
