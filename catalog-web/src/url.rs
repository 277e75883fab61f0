//! The router as the owner of the query string

use crate::Route;
use catalog_ui::stores::UrlSubstrate;
use dioxus::prelude::*;

/// Writes committed parameters by replacing the current `Home` route, so
/// filter edits do not pile up history entries
pub struct RouterUrl {
    navigator: Navigator,
}

impl RouterUrl {
    /// Must be created inside the router
    pub fn new() -> Self {
        Self {
            navigator: navigator(),
        }
    }
}

impl UrlSubstrate for RouterUrl {
    fn write_query(&self, query: &str) {
        self.navigator.replace(Route::Home {
            query: query.to_string(),
        });
    }
}
