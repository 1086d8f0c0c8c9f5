//! veil mocks - Web demo for the dialog
//!
//! A minimal web app that renders the dialog with live controls.

pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::MockModal;
use veil_ui::ModalRoot;

/// Tailwind play CDN, so the default theme classes resolve without a build step
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Script { src: TAILWIND_CDN }
        ModalRoot {
            div { class: "min-h-screen bg-gray-900", MockModal {} }
        }
    }
}
