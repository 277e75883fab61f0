//! Fetch status panels shown in place of the grid

use crate::components::icons::RefreshIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Spinner for the initial catalog fetch
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-4 py-16 text-gray-300",
            role: "status",
            div { class: "animate-spin rounded-full h-10 w-10 border-2 border-gray-600 border-t-indigo-500" }
            p { class: "text-sm", "{message}" }
        }
    }
}

/// Failed fetch: the error text plus a manual retry
#[component]
pub fn LoadError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "max-w-lg mx-auto my-12 bg-red-950/60 border border-red-800 rounded-lg px-5 py-4",
            role: "alert",
            p { class: "font-semibold text-red-100", "The catalog could not be loaded." }
            p { class: "mt-1 text-sm text-red-200 break-words", "{message}" }
            div { class: "mt-4",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_retry.call(()),
                    RefreshIcon {}
                    "Retry"
                }
            }
        }
    }
}
