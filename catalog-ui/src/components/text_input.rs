//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Smaller padding
    Small,
    /// Standard padding
    Medium,
}

/// Text input that reports every keystroke through `on_input`.
///
/// `input_type` switches to e.g. `"number"` for the price bounds; the value
/// is still passed through as the raw string.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] aria_label: Option<&'static str>,
    #[props(default)] class: Option<&'static str>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2.5 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };

    let base = "bg-gray-800/50 rounded-lg focus:outline-none focus:ring-1 focus:ring-accent/50 text-gray-300 placeholder-gray-500";
    let width = class.unwrap_or("w-full");

    rsx! {
        input {
            r#type: input_type,
            class: "{base} {padding} {width}",
            value: "{value}",
            placeholder,
            aria_label,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
