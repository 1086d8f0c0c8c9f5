//! Modal playground
//!
//! Every prop has a control. The trigger sits inside a clipped, scrolling
//! card so relocation into `ModalRoot` is visible, and the page is tall
//! enough to show the scroll lock.

use dioxus::prelude::*;
use tracing::info;
use veil_ui::{CloseButtonAlignment, Modal, ModalRole, ModalSize};

use crate::ui::{Checkbox, Select, ToggleButton};

#[component]
pub fn MockModal() -> Element {
    let mut is_open = use_signal(|| false);
    let mut close_requests = use_signal(|| 0u32);

    let mut size = use_signal(ModalSize::default);
    let mut role = use_signal(ModalRole::default);
    let mut alignment = use_signal(CloseButtonAlignment::default);
    let mut header = use_signal(|| true);
    let mut footer = use_signal(|| true);
    let mut show_close_icon = use_signal(|| true);
    let mut show_close_button = use_signal(|| true);
    let mut full_width = use_signal(|| false);
    let mut full_screen = use_signal(|| false);
    let mut close_on_backdrop_click = use_signal(|| true);
    let mut close_on_esc = use_signal(|| true);
    let mut lock_scroll = use_signal(|| true);
    // Ignoring close requests shows that the dialog never closes itself
    let mut honor_close = use_signal(|| true);

    let open: ReadSignal<bool> = is_open.into();
    let size_options: Vec<&'static str> = ModalSize::ALL.iter().map(|s| s.as_str()).collect();

    rsx! {
        div { class: "p-8 text-white space-y-6",
            h1 { class: "text-2xl font-bold", "Modal" }

            div { class: "grid grid-cols-3 gap-3 max-w-3xl",
                Checkbox {
                    checked: header(),
                    onchange: move |v| header.set(v),
                    label: "Header",
                }
                Checkbox {
                    checked: footer(),
                    onchange: move |v| footer.set(v),
                    label: "Footer",
                }
                Checkbox {
                    checked: show_close_icon(),
                    onchange: move |v| show_close_icon.set(v),
                    label: "Close icon",
                }
                Checkbox {
                    checked: show_close_button(),
                    onchange: move |v| show_close_button.set(v),
                    label: "Close button",
                }
                Checkbox {
                    checked: full_width(),
                    onchange: move |v| full_width.set(v),
                    label: "Full-width close button",
                }
                Checkbox {
                    checked: full_screen(),
                    onchange: move |v| full_screen.set(v),
                    label: "Full screen",
                }
                Checkbox {
                    checked: close_on_backdrop_click(),
                    onchange: move |v| close_on_backdrop_click.set(v),
                    label: "Close on backdrop click",
                }
                Checkbox {
                    checked: close_on_esc(),
                    onchange: move |v| close_on_esc.set(v),
                    label: "Close on Escape",
                }
                Checkbox {
                    checked: lock_scroll(),
                    onchange: move |v| lock_scroll.set(v),
                    label: "Lock scroll",
                }
                Checkbox {
                    checked: honor_close(),
                    onchange: move |v| honor_close.set(v),
                    label: "Honor close requests",
                    tooltip: "When off, close requests are only counted",
                }
            }

            div { class: "flex items-center gap-4",
                Select {
                    label: "Size",
                    value: size().as_str(),
                    options: size_options,
                    onchange: move |v: String| {
                        if let Some(parsed) = ModalSize::parse(&v) {
                            size.set(parsed);
                        }
                    },
                }
                ToggleButton {
                    selected: role() == ModalRole::AlertDialog,
                    onclick: move |_| {
                        let next = match role() {
                            ModalRole::Dialog => ModalRole::AlertDialog,
                            ModalRole::AlertDialog => ModalRole::Dialog,
                        };
                        role.set(next);
                    },
                    label: "alertdialog role",
                }
                for (label , choice) in CloseButtonAlignment::ALL.map(|a| (a.as_str(), a)) {
                    ToggleButton {
                        key: "{label}",
                        selected: alignment() == choice,
                        onclick: move |_| alignment.set(choice),
                        label,
                    }
                }
            }

            p { class: "text-sm text-gray-400", "Close requests: {close_requests}" }

            // Clipped container: the dialog must escape it
            div { class: "h-40 w-80 overflow-hidden rounded-lg border border-gray-700 p-4",
                button {
                    class: "px-4 py-2 bg-blue-600 hover:bg-blue-500 rounded-lg",
                    onclick: move |_| is_open.set(true),
                    "Open dialog"
                }
                Modal {
                    is_open: open,
                    on_close: move |_| {
                        close_requests += 1;
                        info!("close requested");
                        if honor_close() {
                            is_open.set(false);
                        }
                    },
                    size: size(),
                    role: role(),
                    header: header(),
                    footer: footer(),
                    header_content: "Playground dialog",
                    footer_content: "Footer text",
                    show_close_icon: show_close_icon(),
                    show_close_button: show_close_button(),
                    close_button_alignment: alignment(),
                    close_button_full_width: full_width(),
                    full_screen: full_screen(),
                    close_on_backdrop_click: close_on_backdrop_click(),
                    close_on_esc: close_on_esc(),
                    lock_scroll: lock_scroll(),
                    aria_label: "Playground dialog".to_string(),
                    p { "Scroll the page behind this dialog to check the lock." }
                    if !honor_close() {
                        button {
                            class: "mt-4 px-3 py-1.5 text-sm rounded bg-gray-700",
                            onclick: move |_| is_open.set(false),
                            "Force close"
                        }
                    }
                }
            }

            div { class: "h-[200vh] text-gray-600", "Filler to make the page scroll" }
        }
    }
}
