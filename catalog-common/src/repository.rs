//! Item repository
//!
//! The list is fetched once per session through an injected `ItemSource`.
//! `load_items` normalizes whatever the source returns; the caller owns the
//! resulting snapshot and its `LoadStatus`.

use crate::error::FetchError;
use crate::item::{Item, RawItem};
use async_trait::async_trait;
use tracing::{error, info};

/// Where items come from (HTTP in the app, fixtures in tests)
#[async_trait(?Send)]
pub trait ItemSource {
    async fn fetch_items(&self) -> Result<Vec<RawItem>, FetchError>;
}

/// Lifecycle of the one catalog fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Idle | LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Fetch and normalize the full catalog
pub async fn load_items<S>(source: &S, placeholder_image: &str) -> Result<Vec<Item>, FetchError>
where
    S: ItemSource + ?Sized,
{
    info!("Fetching catalog");
    match source.fetch_items().await {
        Ok(raw) => {
            let items: Vec<Item> = raw
                .into_iter()
                .map(|item| item.normalize(placeholder_image))
                .collect();
            info!("Loaded {} catalog items", items.len());
            Ok(items)
        }
        Err(e) => {
            error!("Catalog fetch failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::PricingOption;
    use serde_json::json;

    struct FixtureSource(serde_json::Value);

    #[async_trait(?Send)]
    impl ItemSource for FixtureSource {
        async fn fetch_items(&self) -> Result<Vec<RawItem>, FetchError> {
            Ok(serde_json::from_value(self.0.clone())?)
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl ItemSource for FailingSource {
        async fn fetch_items(&self) -> Result<Vec<RawItem>, FetchError> {
            Err(FetchError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_normalizes_items() {
        let source = FixtureSource(json!([
            { "id": "1", "creator": "Ann", "title": "Coat", "pricingOption": 1, "price": 20 },
            { "id": "2", "creator": "Bo", "title": "Hat", "pricingOption": 0, "imagePath": "/hat.png" },
        ]));

        let items = load_items(&source, "/default.jpg").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, 20.0);
        assert_eq!(items[0].image_path, "/default.jpg");
        assert_eq!(items[1].price, 0.0);
        assert_eq!(items[1].pricing_option, PricingOption::Free);
    }

    #[tokio::test]
    async fn test_load_surfaces_status_error() {
        let err = load_items(&FailingSource, "/default.jpg").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch data: 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_non_array_body_is_decode_error() {
        let source = FixtureSource(json!({ "items": [] }));
        let err = load_items(&source, "/default.jpg").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_status_helpers() {
        assert!(LoadStatus::Idle.is_loading());
        assert!(LoadStatus::Loading.is_loading());
        assert!(!LoadStatus::Succeeded.is_loading());
        assert_eq!(LoadStatus::Failed("boom".into()).error(), Some("boom"));
    }
}
