//! Select control over a fixed list of string options

use dioxus::prelude::*;

#[component]
pub fn Select(
    label: &'static str,
    value: &'static str,
    options: Vec<&'static str>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "flex items-center gap-2 text-gray-400 text-sm",
            "{label}"
            select {
                class: "bg-gray-700 text-gray-300 text-sm rounded px-2 py-1 border border-gray-600",
                value,
                onchange: move |e| onchange.call(e.value()),
                for choice in options {
                    option {
                        key: "{choice}",
                        value: choice,
                        selected: choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}
