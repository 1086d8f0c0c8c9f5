//! Portal outlet the dialog markup is relocated into
//!
//! `ModalRoot` sits near the top of the app. It provides a [`PortalTarget`]
//! through context and renders everything attached to it after its own
//! children, so a dialog opened deep inside an `overflow: hidden` container
//! still lands at the top of the stacking order.

use dioxus::prelude::*;
use veil_core::{MountSlot, MountTarget, SessionId};

/// A list of relocated fragments, keyed by the session that owns them
#[derive(Clone, Copy, PartialEq)]
pub struct PortalTarget {
    entries: Signal<Vec<(SessionId, Element)>>,
}

impl PortalTarget {
    pub fn is_empty(&self) -> bool {
        self.entries.peek().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.peek().len()
    }
}

impl MountTarget for PortalTarget {
    type Content = Element;
    type Slot = PortalSlot;

    fn attach(&self, owner: SessionId, content: Element) -> Option<PortalSlot> {
        let mut entries = self.entries;
        let mut entries = entries.try_write().ok()?;
        entries.retain(|(id, _)| *id != owner);
        entries.push((owner, content));
        Some(PortalSlot {
            target: *self,
            owner,
        })
    }
}

/// One fragment inside a [`PortalTarget`]. Removed on drop.
pub struct PortalSlot {
    target: PortalTarget,
    owner: SessionId,
}

impl MountSlot for PortalSlot {
    type Content = Element;

    fn update(&mut self, content: Element) {
        let mut entries = self.target.entries;
        // Target may already be gone if the root unmounted first
        let Ok(mut entries) = entries.try_write() else {
            return;
        };
        match entries.iter_mut().find(|(id, _)| *id == self.owner) {
            Some(entry) => entry.1 = content,
            None => entries.push((self.owner, content)),
        }
    }
}

impl Drop for PortalSlot {
    fn drop(&mut self) {
        let mut entries = self.target.entries;
        if let Ok(mut entries) = entries.try_write() {
            entries.retain(|(id, _)| *id != self.owner);
        }
    }
}

/// Context marker so an explicitly passed target never shadows the root one
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct RootPortal(pub(crate) PortalTarget);

/// Creates a standalone portal target. Render it with [`PortalOutlet`].
pub fn use_portal_target() -> PortalTarget {
    let entries = use_signal(Vec::new);
    PortalTarget { entries }
}

/// The target provided by the nearest [`ModalRoot`], if any
pub fn use_root_portal() -> Option<PortalTarget> {
    try_use_context::<RootPortal>().map(|root| root.0)
}

/// Renders every fragment attached to `target`, in attach order
#[component]
pub fn PortalOutlet(target: PortalTarget) -> Element {
    let entries = target.entries.read();
    rsx! {
        for (owner, content) in entries.iter() {
            Fragment { key: "{owner}", {content.clone()} }
        }
    }
}

/// Wrap the app in this to give every dialog a top-level mount point
#[component]
pub fn ModalRoot(children: Element) -> Element {
    let target = use_portal_target();
    use_context_provider(|| RootPortal(target));

    rsx! {
        {children}
        PortalOutlet { target }
    }
}
