//! Render-target relocation
//!
//! Markup is owned by the session for lifecycle purposes but attached under
//! a mount target elsewhere in the host tree, so ancestor overflow and
//! stacking contexts cannot clip it.

use tracing::{debug, warn};

use crate::ids::SessionId;

/// A place in the host tree that can hold relocated markup
pub trait MountTarget {
    type Content;
    type Slot: MountSlot<Content = Self::Content>;

    /// Attaches `content`. Returns `None` if the target cannot hold it.
    fn attach(&self, owner: SessionId, content: Self::Content) -> Option<Self::Slot>;
}

/// Attached markup. Dropping the slot detaches it.
pub trait MountSlot {
    type Content;

    fn update(&mut self, content: Self::Content);
}

/// Keeps at most one slot attached, and only while the session is open
pub struct Relocator<T: MountTarget> {
    owner: SessionId,
    target: T,
    slot: Option<T::Slot>,
}

impl<T: MountTarget> Relocator<T> {
    pub fn new(owner: SessionId, target: T) -> Self {
        Self {
            owner,
            target,
            slot: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_attached(&self) -> bool {
        self.slot.is_some()
    }

    /// The attached markup, if any
    pub fn slot(&self) -> Option<&T::Slot> {
        self.slot.as_ref()
    }

    /// Attaches on open, refreshes while open, detaches on close.
    ///
    /// `content` is only built when the session is open.
    pub fn sync(&mut self, open: bool, content: impl FnOnce() -> T::Content) {
        if !open {
            self.detach();
            return;
        }

        match self.slot.as_mut() {
            Some(slot) => slot.update(content()),
            None => {
                self.slot = self.target.attach(self.owner, content());
                if self.slot.is_some() {
                    debug!("{}: markup attached", self.owner);
                } else {
                    warn!("{}: mount target refused markup", self.owner);
                }
            }
        }
    }

    /// Switches mount target. Markup already attached is detached from the
    /// old target; the next `sync` attaches it under the new one.
    pub fn retarget(&mut self, target: T)
    where
        T: PartialEq,
    {
        if self.target == target {
            return;
        }
        self.detach();
        self.target = target;
    }

    pub fn detach(&mut self) {
        if self.slot.take().is_some() {
            debug!("{}: markup detached", self.owner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryHost, NodeSpec};

    fn fragment() -> Vec<NodeSpec> {
        vec![
            NodeSpec::new("div").id("backdrop"),
            NodeSpec::new("div").id("panel"),
        ]
    }

    #[test]
    fn test_attach_only_while_open() {
        let host = MemoryHost::new();
        let body = host.body_node().unwrap();
        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(body));

        relocator.sync(false, || unreachable!("content built while closed"));
        assert!(!relocator.is_attached());
        assert!(host.children(body).is_empty());

        relocator.sync(true, fragment);
        assert!(relocator.is_attached());
        assert_eq!(host.children(body).len(), 2);

        relocator.sync(true, fragment);
        assert_eq!(host.children(body).len(), 2);

        relocator.sync(false, fragment);
        assert!(host.children(body).is_empty());
    }

    #[test]
    fn test_backdrop_and_panel_share_one_slot() {
        let host = MemoryHost::new();
        let body = host.body_node().unwrap();
        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(body));

        relocator.sync(true, fragment);
        assert!(host.element_by_id("backdrop").is_some());
        assert!(host.element_by_id("panel").is_some());
        let roots = relocator.slot().unwrap().roots().to_vec();
        assert_eq!(roots, vec![
            host.element_by_id("backdrop").unwrap(),
            host.element_by_id("panel").unwrap(),
        ]);

        relocator.detach();
        assert!(relocator.slot().is_none());
        assert!(host.element_by_id("backdrop").is_none());
        assert!(host.element_by_id("panel").is_none());
    }

    #[test]
    fn test_markup_lands_under_target_not_declaring_parent() {
        let host = MemoryHost::new();
        let body = host.body_node().unwrap();
        let clipped = host.create_element("div", Some("scroll-container"));
        let layer = host.create_element("div", Some("overlay-layer"));
        host.append_child(body, clipped);
        host.append_child(body, layer);

        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(layer));
        relocator.sync(true, fragment);

        let panel = host.element_by_id("panel").unwrap();
        assert!(host.contains(layer, panel));
        assert!(!host.contains(clipped, panel));
    }

    #[test]
    fn test_retarget_moves_markup() {
        let host = MemoryHost::new();
        let body = host.body_node().unwrap();
        let layer = host.create_element("div", Some("layer"));
        host.append_child(body, layer);

        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(body));
        relocator.sync(true, fragment);

        relocator.retarget(host.mount_point(layer));
        assert!(!relocator.is_attached());
        relocator.sync(true, fragment);

        let panel = host.element_by_id("panel").unwrap();
        assert_eq!(host.parent(panel), Some(layer));
        assert_eq!(host.children(body), vec![layer]);
    }

    #[test]
    fn test_retarget_to_same_target_keeps_markup() {
        let host = MemoryHost::new();
        let body = host.body_node().unwrap();
        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(body));
        relocator.sync(true, fragment);

        relocator.retarget(host.mount_point(body));
        assert!(relocator.is_attached());
    }

    #[test]
    fn test_drop_detaches() {
        let host = MemoryHost::new();
        let body = host.body_node().unwrap();
        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(body));
        relocator.sync(true, fragment);

        drop(relocator);
        assert!(host.children(body).is_empty());
    }

    #[test]
    fn test_target_without_document_refuses() {
        let host = MemoryHost::without_document();
        let real = MemoryHost::new();
        let body = real.body_node().unwrap();
        let mut relocator = Relocator::new(SessionId::next(), host.mount_point(body));
        relocator.sync(true, fragment);
        assert!(!relocator.is_attached());
    }
}
