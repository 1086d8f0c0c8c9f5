//! Fixed section order of the dialog panel

use crate::config::{ChromeFlags, CloseButtonLayout};
use crate::ids::ResolvedIds;

/// One section of the panel, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CloseIcon,
    Header,
    Body,
    Footer,
    CloseButton(CloseButtonLayout),
}

impl Section {
    /// Ids of elements this section renders that ARIA attributes may point at
    pub fn provided_ids<'a>(&self, ids: &'a ResolvedIds) -> Vec<&'a str> {
        match self {
            Section::CloseIcon | Section::CloseButton(_) => Vec::new(),
            Section::Header => vec![ids.title.as_str()],
            Section::Body => vec![ids.content.as_str(), ids.description.as_str()],
            Section::Footer => vec![ids.footer.as_str()],
        }
    }
}

/// Close icon, header, body, footer, close button. Only the body is
/// unconditional.
pub fn compose(chrome: &ChromeFlags) -> Vec<Section> {
    let mut sections = Vec::with_capacity(5);
    if chrome.close_icon {
        sections.push(Section::CloseIcon);
    }
    if chrome.header {
        sections.push(Section::Header);
    }
    sections.push(Section::Body);
    if chrome.footer {
        sections.push(Section::Footer);
    }
    if chrome.close_button {
        sections.push(Section::CloseButton(chrome.close_button_layout));
    }
    sections
}
