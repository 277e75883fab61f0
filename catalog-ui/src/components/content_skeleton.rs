//! Placeholder card shown while the next page is loading

use crate::components::icons::ImageIcon;
use dioxus::prelude::*;

#[component]
pub fn ContentSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden h-full animate-pulse",
            "data-testid": "content-skeleton",
            aria_hidden: "true",
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                ImageIcon { class: "w-12 h-12 text-gray-600" }
            }
            div { class: "p-4 flex flex-col gap-2",
                div { class: "h-5 bg-gray-700 rounded w-3/4" }
                div { class: "h-4 bg-gray-700 rounded w-1/2" }
                div { class: "h-4 bg-gray-700 rounded w-12 mt-2" }
            }
        }
    }
}
