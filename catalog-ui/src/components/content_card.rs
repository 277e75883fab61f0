//! Content card component - pure view of one catalog item

use catalog_common::{Item, PricingOption};
use dioxus::prelude::*;

/// Individual catalog card
#[component]
pub fn ContentCard(item: Item) -> Element {
    let price_label = item.price_label();
    let badge_class = match item.pricing_option {
        PricingOption::Paid => "bg-indigo-600 text-white",
        PricingOption::Free => "bg-emerald-600 text-white",
        PricingOption::ViewOnly => "bg-gray-600 text-gray-100",
    };

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 h-full flex flex-col",
            "data-testid": "content-card",
            div { class: "aspect-square bg-gray-700",
                img {
                    src: "{item.image_path}",
                    alt: "{item.title}",
                    loading: "lazy",
                    class: "w-full h-full object-cover",
                }
            }
            div { class: "p-4 flex flex-col gap-1",
                h3 {
                    class: "font-bold text-white text-lg truncate",
                    title: "{item.title}",
                    "{item.title}"
                }
                p {
                    class: "text-gray-400 text-sm truncate",
                    title: "{item.creator}",
                    "By {item.creator}"
                }
                span { class: "self-start mt-2 text-xs font-semibold rounded px-2 py-0.5 {badge_class}",
                    "{price_label}"
                }
            }
        }
    }
}
