//! Presentation classes for the dialog
//!
//! The lifecycle core never looks at these. Apps either use the Tailwind
//! defaults, override fields in code, or load a partial theme from JSON:
//!
//! ```ignore
//! let theme = ModalTheme::from_json(r#"{ "panel": "my-panel" }"#)?;
//! provide_modal_theme(theme);
//! ```

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use veil_core::{CloseButtonAlignment, CloseButtonLayout, ModalSize, SCROLL_LOCK_CLASS};

/// Panel width per size preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeClasses {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for SizeClasses {
    fn default() -> Self {
        Self {
            xs: "max-w-xs".to_string(),
            sm: "max-w-sm".to_string(),
            md: "max-w-md".to_string(),
            lg: "max-w-2xl".to_string(),
            xl: "max-w-4xl".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalTheme {
    pub backdrop: String,
    pub panel: String,
    pub sizes: SizeClasses,
    /// Replaces the size class when the dialog is full screen
    pub full_screen: String,
    pub close_icon: String,
    pub header: String,
    pub title: String,
    pub body: String,
    pub footer: String,
    pub footer_text: String,
    pub close_button_wrapper: String,
    pub close_button: String,
    pub align_left: String,
    pub align_center: String,
    pub align_right: String,
    pub full_width: String,
    /// Marker class put on `<body>` while any dialog holds the scroll lock
    pub scroll_lock: String,
}

impl Default for ModalTheme {
    fn default() -> Self {
        Self {
            backdrop: "fixed inset-0 bg-black/60 z-[3000] transition-opacity".to_string(),
            panel: "fixed left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 z-[3001] w-full bg-gray-800 text-white rounded-lg shadow-xl flex flex-col max-h-[90vh]".to_string(),
            sizes: SizeClasses::default(),
            full_screen: "max-w-none h-screen max-h-screen rounded-none".to_string(),
            close_icon: "absolute top-3 right-3 p-1 text-gray-400 hover:text-white rounded".to_string(),
            header: "px-6 pt-6 pb-2".to_string(),
            title: "text-xl font-bold".to_string(),
            body: "px-6 py-4 overflow-y-auto text-gray-300".to_string(),
            footer: "px-6 pb-2".to_string(),
            footer_text: "text-sm text-gray-400".to_string(),
            close_button_wrapper: "flex px-6 pb-6".to_string(),
            close_button: "px-4 py-2 bg-gray-700 hover:bg-gray-600 text-white rounded-lg".to_string(),
            align_left: "justify-start".to_string(),
            align_center: "justify-center".to_string(),
            align_right: "justify-end".to_string(),
            full_width: "[&>button]:w-full".to_string(),
            scroll_lock: SCROLL_LOCK_CLASS.to_string(),
        }
    }
}

/// Joins non-empty class fragments with single spaces
fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ModalTheme {
    /// Parses a theme. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn size_class(&self, size: ModalSize) -> &str {
        match size {
            ModalSize::Xs => &self.sizes.xs,
            ModalSize::Sm => &self.sizes.sm,
            ModalSize::Md => &self.sizes.md,
            ModalSize::Lg => &self.sizes.lg,
            ModalSize::Xl => &self.sizes.xl,
        }
    }

    pub fn alignment_class(&self, alignment: CloseButtonAlignment) -> &str {
        match alignment {
            CloseButtonAlignment::Left => &self.align_left,
            CloseButtonAlignment::Center => &self.align_center,
            CloseButtonAlignment::Right => &self.align_right,
        }
    }

    pub fn backdrop_classes(&self, extra: Option<&str>) -> String {
        join_classes([extra.unwrap_or_default(), self.backdrop.as_str()])
    }

    pub fn panel_classes(&self, size: ModalSize, full_screen: bool, extra: Option<&str>) -> String {
        let sizing = if full_screen {
            self.full_screen.as_str()
        } else {
            self.size_class(size)
        };
        join_classes([extra.unwrap_or_default(), self.panel.as_str(), sizing])
    }

    pub fn body_classes(&self, extra: Option<&str>) -> String {
        join_classes([extra.unwrap_or_default(), self.body.as_str()])
    }

    pub fn close_button_wrapper_classes(&self, layout: CloseButtonLayout) -> String {
        let full_width = if layout.full_width {
            self.full_width.as_str()
        } else {
            ""
        };
        join_classes([
            self.close_button_wrapper.as_str(),
            self.alignment_class(layout.alignment),
            full_width,
        ])
    }
}

/// Makes `theme` the theme for every dialog below the current component
pub fn provide_modal_theme(theme: ModalTheme) -> ModalTheme {
    use_context_provider(|| theme)
}

/// The nearest provided theme, or the default one
pub fn use_modal_theme() -> ModalTheme {
    try_use_context::<ModalTheme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let theme = ModalTheme::from_json(r#"{ "panel": "card", "sizes": { "xl": "w-full" } }"#)
            .unwrap();
        assert_eq!(theme.panel, "card");
        assert_eq!(theme.sizes.xl, "w-full");
        assert_eq!(theme.sizes.xs, SizeClasses::default().xs);
        assert_eq!(theme.scroll_lock, SCROLL_LOCK_CLASS);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ModalTheme::from_json("{ panel: }").is_err());
    }

    #[test]
    fn test_panel_classes_size_and_full_screen() {
        let theme = ModalTheme {
            panel: "panel".into(),
            full_screen: "fill".into(),
            ..Default::default()
        };
        assert_eq!(
            theme.panel_classes(ModalSize::Md, false, Some("mine")),
            format!("mine panel {}", SizeClasses::default().md)
        );
        assert_eq!(theme.panel_classes(ModalSize::Md, true, None), "panel fill");
    }

    #[test]
    fn test_close_button_wrapper_classes() {
        let theme = ModalTheme {
            close_button_wrapper: "wrap".into(),
            align_left: "left".into(),
            full_width: "wide".into(),
            ..Default::default()
        };
        let layout = CloseButtonLayout {
            alignment: CloseButtonAlignment::Left,
            full_width: true,
        };
        assert_eq!(theme.close_button_wrapper_classes(layout), "wrap left wide");

        let layout = CloseButtonLayout {
            alignment: CloseButtonAlignment::Left,
            full_width: false,
        };
        assert_eq!(theme.close_button_wrapper_classes(layout), "wrap left");
    }

    #[test]
    fn test_empty_fragments_are_dropped() {
        assert_eq!(join_classes(["", "  a ", "", "b"]), "a b");
    }

    #[test]
    fn test_theme_round_trips_through_json() {
        let theme = ModalTheme::default();
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(ModalTheme::from_json(&json).unwrap(), theme);
    }
}
