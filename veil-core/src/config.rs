//! Behavioral configuration of a dialog
//!
//! Mirrors the component's props minus the presentation pass-throughs
//! (class names, inline styles) and the content itself.

use veil_common::{CloseButtonAlignment, ModalRole, ModalSize};

use crate::error::ModalError;
use crate::ids::ModalIds;
use crate::session::SessionInputs;

/// Which implicit dismissal gestures produce a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub on_escape: bool,
    pub on_backdrop_click: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            on_escape: true,
            on_backdrop_click: true,
        }
    }
}

/// Alignment and width of the secondary "Close" button.
/// Inert when the button itself is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloseButtonLayout {
    pub alignment: CloseButtonAlignment,
    pub full_width: bool,
}

/// Optional chrome sections around the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeFlags {
    /// The ✕ icon button in the corner
    pub close_icon: bool,
    pub header: bool,
    pub footer: bool,
    /// The secondary "Close" text button below the footer
    pub close_button: bool,
    pub close_button_layout: CloseButtonLayout,
    pub full_screen: bool,
}

impl Default for ChromeFlags {
    fn default() -> Self {
        Self {
            close_icon: true,
            header: true,
            footer: true,
            close_button: true,
            close_button_layout: CloseButtonLayout::default(),
            full_screen: false,
        }
    }
}

/// Everything about a dialog that affects behavior or semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
    pub size: ModalSize,
    pub role: ModalRole,
    pub dismiss: DismissPolicy,
    pub chrome: ChromeFlags,
    pub ids: ModalIds,
    /// Disable background scrolling while open. Always on unless opted out.
    pub lock_scroll: bool,
    /// Accessible name used when no header is rendered
    pub aria_label: Option<String>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            size: ModalSize::default(),
            role: ModalRole::default(),
            dismiss: DismissPolicy::default(),
            chrome: ChromeFlags::default(),
            ids: ModalIds::default(),
            lock_scroll: true,
            aria_label: None,
        }
    }
}

impl ModalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ModalError> {
        self.ids.validate()
    }

    /// Reconciler inputs for the given open state
    pub fn inputs(&self, open: bool) -> SessionInputs {
        SessionInputs {
            open,
            dismiss: self.dismiss,
            lock_scroll: self.lock_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_component_props() {
        let config = ModalConfig::new();
        assert_eq!(config.size, ModalSize::Xs);
        assert_eq!(config.role, ModalRole::Dialog);
        assert!(config.dismiss.on_escape);
        assert!(config.dismiss.on_backdrop_click);
        assert!(config.chrome.header);
        assert!(config.chrome.footer);
        assert!(config.chrome.close_button);
        assert!(!config.chrome.full_screen);
        assert_eq!(
            config.chrome.close_button_layout.alignment,
            CloseButtonAlignment::Right
        );
        assert!(!config.chrome.close_button_layout.full_width);
        assert!(config.lock_scroll);
    }

    #[test]
    fn test_inputs_carry_policy() {
        let mut config = ModalConfig::new();
        config.dismiss.on_escape = false;
        let inputs = config.inputs(true);
        assert!(inputs.open);
        assert!(!inputs.dismiss.on_escape);
        assert!(inputs.dismiss.on_backdrop_click);
    }

    #[test]
    fn test_validate_checks_ids() {
        let mut config = ModalConfig::new();
        assert!(config.validate().is_ok());
        config.ids.content = Some("two words".into());
        assert!(config.validate().is_err());
    }
}
