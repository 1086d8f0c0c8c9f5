//! Unstyled button used for the dialog's close controls

use dioxus::prelude::*;

/// Button with accessibility wiring and no visual styling of its own
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
