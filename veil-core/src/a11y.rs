//! Dialog role and label/description associations
//!
//! References are emitted only for sections that render, so assistive
//! technology never follows an `aria-*` id to a missing element.

use veil_common::ModalRole;

use crate::config::ChromeFlags;
use crate::ids::ResolvedIds;

/// Attributes for the panel and its footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSemantics {
    pub role: ModalRole,
    pub aria_modal: bool,
    /// Panel `aria-labelledby`, pointing at the header title
    pub labelled_by: Option<String>,
    /// Panel `aria-label`, used only when there is no header to point at
    pub label: Option<String>,
    /// Panel `aria-describedby`, pointing at the body
    pub described_by: String,
    /// Footer section `aria-labelledby`, pointing at the footer text
    pub footer_labelled_by: Option<String>,
}

impl DialogSemantics {
    pub fn aria_modal_value(&self) -> &'static str {
        if self.aria_modal {
            "true"
        } else {
            "false"
        }
    }

    /// Every id referenced by an `aria-*` attribute
    pub fn referenced_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.described_by.as_str()];
        ids.extend(self.labelled_by.as_deref());
        ids.extend(self.footer_labelled_by.as_deref());
        ids
    }
}

pub fn annotate(
    ids: &ResolvedIds,
    chrome: &ChromeFlags,
    role: ModalRole,
    aria_label: Option<&str>,
) -> DialogSemantics {
    let labelled_by = chrome.header.then(|| ids.title.clone());
    let label = match labelled_by {
        Some(_) => None,
        None => aria_label.map(str::to_string),
    };

    DialogSemantics {
        role,
        aria_modal: true,
        labelled_by,
        label,
        described_by: ids.description.clone(),
        footer_labelled_by: chrome.footer.then(|| ids.footer.clone()),
    }
}
