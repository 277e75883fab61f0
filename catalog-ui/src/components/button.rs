//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo fill, for the one action a panel asks for
    Primary,
    /// Muted fill, used by the filter reset
    Secondary,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
    };

    rsx! {
        button {
            class: "inline-flex items-center gap-2 rounded-lg transition-colors {size_class} {variant_class}",
            r#type: "button",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
