//! Catalog item model
//!
//! `RawItem` mirrors the JSON the API returns, where `price` and `imagePath`
//! may be missing. `Item` is the normalized form the rest of the app uses.

use crate::params::PricingCategory;
use serde::{Deserialize, Serialize};

/// How an item is offered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PricingOption {
    Free,
    Paid,
    ViewOnly,
}

impl From<i64> for PricingOption {
    /// Unknown codes are shown as view-only rather than rejected
    fn from(code: i64) -> Self {
        match code {
            0 => PricingOption::Free,
            1 => PricingOption::Paid,
            _ => PricingOption::ViewOnly,
        }
    }
}

impl From<PricingOption> for i64 {
    fn from(option: PricingOption) -> Self {
        match option {
            PricingOption::Free => 0,
            PricingOption::Paid => 1,
            PricingOption::ViewOnly => 2,
        }
    }
}

impl PricingOption {
    /// Category name used by the `pricing` URL parameter
    pub fn category(self) -> PricingCategory {
        match self {
            PricingOption::Free => PricingCategory::Free,
            PricingOption::Paid => PricingCategory::Paid,
            PricingOption::ViewOnly => PricingCategory::View,
        }
    }
}

/// Item as delivered by the API
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub id: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub title: String,
    pub pricing_option: PricingOption,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl RawItem {
    /// Fill in the fields the source is allowed to omit
    pub fn normalize(self, placeholder_image: &str) -> Item {
        Item {
            id: self.id,
            creator: self.creator,
            title: self.title,
            pricing_option: self.pricing_option,
            image_path: self
                .image_path
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| placeholder_image.to_string()),
            price: self.price.filter(|p| p.is_finite()).unwrap_or(0.0),
        }
    }
}

/// One catalog entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub creator: String,
    pub title: String,
    pub pricing_option: PricingOption,
    pub image_path: String,
    pub price: f64,
}

impl Item {
    /// Badge text shown on the card
    pub fn price_label(&self) -> String {
        match self.pricing_option {
            PricingOption::Paid => format!("${:.2}", self.price),
            PricingOption::Free => "Free".to_string(),
            PricingOption::ViewOnly => "View Only".to_string(),
        }
    }
}
