pub mod api;
pub mod pages;
pub mod url;

use catalog_common::CatalogConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Home};

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
pub const PLACEHOLDER_IMAGE: Asset = asset!("/assets/default-image.svg");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/?:..query")]
    Home { query: String },
}

/// Defaults, with the endpoint overridable at build time via `CATALOG_API_URL`
pub fn app_config() -> CatalogConfig {
    let mut config = CatalogConfig::with_endpoint(option_env!("CATALOG_API_URL"));
    config.placeholder_image = PLACEHOLDER_IMAGE.to_string();
    config
}

#[component]
pub fn App() -> Element {
    use_context_provider(app_config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
