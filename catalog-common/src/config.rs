//! Catalog configuration

use crate::pagination::{DEFAULT_PAGE_SIZE, LOAD_MORE_DELAY_MS, SCROLL_THRESHOLD_PX};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://closet-recruiting-api.azurewebsites.net/api/data";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/assets/default-image.svg";

/// Settings for one catalog session
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON endpoint returning the item array
    pub endpoint: String,
    /// Items revealed per scroll step
    pub page_size: usize,
    /// Simulated delay before a "load more" lands
    pub load_more_delay_ms: u64,
    /// Distance from the bottom of the page that triggers the next step
    pub scroll_threshold_px: f64,
    /// Image used for items without one
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            load_more_delay_ms: LOAD_MORE_DELAY_MS,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Defaults with `endpoint` overridden when given
    pub fn with_endpoint(endpoint: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        config
    }
}
