//! veil-ui - Dioxus overlay dialog
//!
//! The `Modal` component reacts to a caller-owned open signal. Document-wide
//! effects come from `veil-core`; this crate supplies the browser host, the
//! portal outlet the dialog markup is relocated into, and the presentation
//! theme.

pub mod components;
pub mod theme;
pub mod wasm_utils;
pub mod web_host;

pub use components::*;
pub use theme::{provide_modal_theme, use_modal_theme, ModalTheme, SizeClasses};
pub use veil_core::{CloseButtonAlignment, ModalRole, ModalSize};
pub use web_host::WebHost;
