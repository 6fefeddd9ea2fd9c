//! Catalog records served by the marketplace
//!
//! Field names serialize in camelCase to match the JSON shape the browser
//! client already consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Product categories shown in the catalog sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JewelryCategory {
    Rings,
    Necklaces,
    Earrings,
    Bangles,
    Bracelets,
    Pendants,
}

impl JewelryCategory {
    /// All categories in catalog display order
    pub const ALL: [JewelryCategory; 6] = [
        JewelryCategory::Rings,
        JewelryCategory::Necklaces,
        JewelryCategory::Earrings,
        JewelryCategory::Bangles,
        JewelryCategory::Bracelets,
        JewelryCategory::Pendants,
    ];

    /// Wire identifier, e.g. `rings`
    pub fn as_str(&self) -> &'static str {
        match self {
            JewelryCategory::Rings => "rings",
            JewelryCategory::Necklaces => "necklaces",
            JewelryCategory::Earrings => "earrings",
            JewelryCategory::Bangles => "bangles",
            JewelryCategory::Bracelets => "bracelets",
            JewelryCategory::Pendants => "pendants",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JewelryCategory::Rings => "Rings",
            JewelryCategory::Necklaces => "Necklaces",
            JewelryCategory::Earrings => "Earrings",
            JewelryCategory::Bangles => "Bangles",
            JewelryCategory::Bracelets => "Bracelets",
            JewelryCategory::Pendants => "Pendants",
        }
    }

    /// Icon name used by the category picker
    pub fn icon(&self) -> &'static str {
        match self {
            JewelryCategory::Rings => "ring",
            JewelryCategory::Necklaces => "necklace",
            JewelryCategory::Earrings => "earring",
            JewelryCategory::Bangles => "bangle",
            JewelryCategory::Bracelets => "bracelet",
            JewelryCategory::Pendants => "pendant",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            id: *self,
            name: self.display_name().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

impl fmt::Display for JewelryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JewelryCategory {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JewelryCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| SharedError::InvalidCategory { input: s.to_string() })
    }
}

/// Category entry as listed by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: JewelryCategory,
    pub name: String,
    pub icon: String,
}

/// Selectable materials in the catalog filter panel
pub const MATERIALS: [&str; 13] = [
    "Gold 22K",
    "Gold 18K",
    "Gold 14K",
    "Silver 925",
    "Platinum",
    "Diamond",
    "Ruby",
    "Emerald",
    "Sapphire",
    "Pearl",
    "Kundan",
    "Polki",
    "Meenakari",
];

/// A catalog product. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JewelryItem {
    pub id: String,
    pub name: String,
    pub category: JewelryCategory,
    pub price: u64,
    pub material: String,
    pub weight: String,
    pub description: String,
    pub image_url: String,
    #[serde(rename = "model3dUrl", default, skip_serializing_if = "Option::is_none")]
    pub model_3d_url: Option<String>,
    pub in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub workshop_name: String,
    /// Two-letter code of the owning state
    pub state: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
    pub rating: f64,
    pub review_count: u32,
    pub specialties: Vec<String>,
    pub thumbnail_image: String,
    pub years_in_business: u32,
    pub verified: bool,
}

/// Extended profile for a seller's workshop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub hero_image: String,
    pub gallery_images: Vec<String>,
    pub established_year: u16,
    pub team_size: u32,
    pub certifications: Vec<String>,
    pub specialties: Vec<String>,
}

/// A state outline on the seller map.
///
/// `seller_count` is a display figure carried with the seed data; it is not
/// derived from the seller list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    pub id: String,
    pub name: String,
    pub seller_count: u32,
    pub path_d: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    Pending,
    Replied,
    Closed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "pending",
            InquiryStatus::Replied => "replied",
            InquiryStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InquiryStatus::Pending),
            "replied" => Ok(InquiryStatus::Replied),
            "closed" => Ok(InquiryStatus::Closed),
            other => Err(SharedError::InvalidStatus { input: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    High,
    Medium,
    Low,
}

/// Customer question listed on the seller dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub message: String,
    pub status: InquiryStatus,
    pub date: NaiveDate,
    pub priority: InquiryPriority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Seller-managed catalog grouping shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub sub_categories: Vec<SubCategory>,
}

/// Cheapest and most expensive catalog prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}
