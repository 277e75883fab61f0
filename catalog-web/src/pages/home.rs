use crate::api::HttpItemSource;
use crate::url::RouterUrl;
use catalog_common::params::{reset_defaults, toggle_pricing, MAX, MIN, PRICING, SEARCH, SORT};
use catalog_common::{CatalogConfig, ParamStore, PricingCategory, SortOrder};
use catalog_ui::hooks::{use_catalog_loader, use_pagination, use_processed_items};
use catalog_ui::stores::{use_url_params, use_url_params_provider, CatalogState, UrlSubstrate};
use catalog_ui::{CatalogView, FilterBar};
use dioxus::prelude::*;
use std::rc::Rc;

/// `query` is the raw query string of the current route. The router owns it;
/// the parameter store follows every change, including links and back/forward.
#[component]
pub fn Home(query: String) -> Element {
    let config: CatalogConfig = use_context();
    let mut url = use_url_params_provider(&query, || {
        Rc::new(RouterUrl::new()) as Rc<dyn UrlSubstrate>
    });
    use_effect(use_reactive((&query,), move |(query,)| url.sync_from_url(&query)));

    let state = use_store(CatalogState::default);
    let retry = use_catalog_loader(state, HttpItemSource::new(&config.endpoint), &config);
    let processed = use_processed_items(state, url);
    let pager = use_pagination(processed, &config);

    rsx! {
        CatalogView {
            state,
            pagination: pager.state(),
            filter_bar: rsx! {
                CatalogFilters {}
            },
            on_load_more: move |_| pager.load_more(),
            on_retry: move |_| retry.call(()),
            scroll_threshold: config.scroll_threshold_px,
        }
    }
}

/// `FilterBar` bound to the URL parameters
#[component]
fn CatalogFilters() -> Element {
    let mut url = use_url_params();
    let pricing = url.get_param_array(PRICING);

    rsx! {
        FilterBar {
            search: url.get_param(SEARCH),
            pricing,
            sort: SortOrder::from_param(&url.get_param(SORT)),
            min_price: url.get_param(MIN),
            max_price: url.get_param(MAX),
            on_search_change: move |value: String| url.set_param(SEARCH, &value),
            on_pricing_toggle: move |category: PricingCategory| {
                let next = toggle_pricing(&url.get_param_array(PRICING), category);
                url.set_param_array(PRICING, &next);
            },
            on_sort_change: move |sort: SortOrder| url.set_param(SORT, sort.as_str()),
            on_min_price_change: move |value: String| url.set_param(MIN, &value),
            on_max_price_change: move |value: String| url.set_param(MAX, &value),
            on_reset: move |_| url.reset_all(reset_defaults()),
        }
    }
}
