//! Catalog view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<CatalogState>` for the fetch status and item count, and
//! a `ReadSignal<Pagination>` for the visible window. The filter bar is passed
//! in as an element so this view never touches the URL.

use crate::components::{ContentCard, ContentSkeleton, LoadError, LoadingState};
use crate::hooks::use_scroll_trigger;
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};
use catalog_common::pagination::SCROLL_THRESHOLD_PX;
use catalog_common::{Footer, LoadStatus, Pagination};
use dioxus::prelude::*;

const GRID_CLASS: &str = "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4";

#[component]
pub fn CatalogView(
    state: ReadStore<CatalogState>,
    pagination: ReadSignal<Pagination>,
    filter_bar: Element,
    /// Called when the user scrolls near the bottom
    on_load_more: EventHandler<()>,
    /// Manual retry after a failed fetch
    on_retry: EventHandler<()>,
    #[props(default = SCROLL_THRESHOLD_PX)] scroll_threshold: f64,
) -> Element {
    use_scroll_trigger(
        scroll_threshold,
        use_callback(move |()| on_load_more.call(())),
    );

    let status = state.status().read().clone();
    let catalog_len = state.items().read().len();

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-6",
            {filter_bar}
            match status {
                LoadStatus::Idle | LoadStatus::Loading => rsx! {
                    LoadingState { message: "Loading initial data...".to_string() }
                },
                LoadStatus::Failed(message) => rsx! {
                    LoadError { message, on_retry: move |_| on_retry.call(()) }
                },
                LoadStatus::Succeeded => rsx! {
                    CatalogGrid { pagination, catalog_len }
                },
            }
        }
    }
}

/// Visible window, skeletons and the status line under it
#[component]
fn CatalogGrid(pagination: ReadSignal<Pagination>, catalog_len: usize) -> Element {
    let page = pagination.read();
    let items = page.visible().to_vec();
    let skeletons = page.skeleton_count();
    let footer = page.footer(catalog_len);
    drop(page);

    rsx! {
        div { class: GRID_CLASS,
            for item in items {
                ContentCard { key: "{item.id}", item }
            }
            for i in 0..skeletons {
                ContentSkeleton { key: "skeleton-{i}" }
            }
        }
        match footer {
            Footer::LoadingMore => rsx! {
                div { class: "text-center my-6 text-gray-300", "Loading more items..." }
            },
            Footer::Exhausted => rsx! {
                div { class: "text-center my-6 text-gray-500", "No more items to load." }
            },
            Footer::NoMatches => rsx! {
                div { class: "text-center my-6 text-gray-500", "No items match your current filters." }
            },
            Footer::EmptyCatalog => rsx! {
                div { class: "text-center my-6 text-gray-500", "No items available." }
            },
            Footer::None => rsx! {},
        }
    }
}
