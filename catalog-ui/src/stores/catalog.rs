//! Catalog state store

use catalog_common::{Item, LoadStatus};
use dioxus::prelude::*;
use std::sync::Arc;

/// State for the catalog view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Every item the API returned, normalized. Replaced wholesale on load.
    pub items: Arc<[Item]>,
    /// Fetch lifecycle
    pub status: LoadStatus,
}
