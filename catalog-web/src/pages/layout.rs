use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        header { class: "sticky top-0 z-10 bg-gray-900/95 backdrop-blur border-b border-gray-800",
            div { class: "max-w-7xl mx-auto px-6 py-3 flex items-center",
                Link { to: Route::Home { query: String::new() }, class: "text-lg font-semibold text-white", "Catalog" }
            }
        }
        main { Outlet::<Route> {} }
    }
}
