//! Filter bar - search, pricing checkboxes, sort, price range, reset
//!
//! Holds no filter state: every value comes in through props (read from the
//! URL by the caller) and every edit goes out through a callback.

use crate::components::icons::SearchIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, TextInput, TextInputSize};
use catalog_common::{PricingCategory, SortOrder};
use dioxus::prelude::*;

#[component]
pub fn FilterBar(
    /// Raw `search` parameter
    search: String,
    /// Raw `pricing` entries
    pricing: Vec<String>,
    sort: SortOrder,
    /// Raw `min` / `max` parameters
    min_price: String,
    max_price: String,
    on_search_change: EventHandler<String>,
    on_pricing_toggle: EventHandler<PricingCategory>,
    on_sort_change: EventHandler<SortOrder>,
    on_min_price_change: EventHandler<String>,
    on_max_price_change: EventHandler<String>,
    on_reset: EventHandler<()>,
) -> Element {
    let paid_selected = pricing
        .iter()
        .any(|p| p == PricingCategory::Paid.as_str());

    rsx! {
        div { class: "mb-6 flex flex-wrap gap-4 items-center",
            div { class: "relative flex-grow min-w-[240px]",
                div { class: "absolute inset-y-0 left-3 flex items-center text-gray-500 pointer-events-none",
                    SearchIcon {}
                }
                TextInput {
                    value: search,
                    on_input: move |value| on_search_change.call(value),
                    size: TextInputSize::Medium,
                    placeholder: "Search by title or creator",
                    aria_label: "Search",
                    class: "w-full pl-9",
                }
            }

            for category in PricingCategory::ALL {
                label {
                    key: "{category.as_str()}",
                    class: "inline-flex items-center gap-1.5 text-sm text-gray-300 cursor-pointer",
                    input {
                        r#type: "checkbox",
                        class: "accent-indigo-500",
                        checked: pricing.iter().any(|p| p == category.as_str()),
                        onchange: move |_| on_pricing_toggle.call(category),
                    }
                    "{category.label()}"
                }
            }

            if paid_selected {
                div { class: "flex items-center gap-2 text-sm text-gray-400",
                    TextInput {
                        value: min_price,
                        on_input: move |value| on_min_price_change.call(value),
                        size: TextInputSize::Small,
                        input_type: "number",
                        placeholder: "Min",
                        aria_label: "Minimum price",
                        class: "w-20",
                    }
                    span { "–" }
                    TextInput {
                        value: max_price,
                        on_input: move |value| on_max_price_change.call(value),
                        size: TextInputSize::Small,
                        input_type: "number",
                        placeholder: "Max",
                        aria_label: "Maximum price",
                        class: "w-20",
                    }
                }
            }

            select {
                class: "bg-gray-800 text-gray-300 text-sm rounded-lg px-3 py-2 border border-gray-600 focus:outline-none focus:ring-1 focus:ring-indigo-500",
                aria_label: "Sort by",
                value: "{sort.as_str()}",
                onchange: move |e| on_sort_change.call(SortOrder::from_param(&e.value())),
                for order in SortOrder::ALL {
                    option {
                        key: "{order.as_str()}",
                        value: "{order.as_str()}",
                        selected: order == sort,
                        "{order.label()}"
                    }
                }
            }

            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Medium,
                onclick: move |_| on_reset.call(()),
                "Reset"
            }
        }
    }
}
