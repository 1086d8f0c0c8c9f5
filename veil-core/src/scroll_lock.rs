//! Token-keyed scroll lock
//!
//! Ownership is tracked per session: the body is locked when the first
//! holder acquires and unlocked only when the last holder releases. One
//! dialog closing can therefore never unlock the page under another dialog
//! that is still open.
//!
//! Locking sets `overflow: hidden` inline on the body, so it takes effect
//! without any stylesheet, and restores whatever inline value was there
//! before. The marker class is added alongside for apps that style the
//! locked state themselves.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::host::Host;
use crate::ids::SessionId;

/// Default marker class added to the body while locked
pub const SCROLL_LOCK_CLASS: &str = "veil-scroll-lock";

const OVERFLOW: &str = "overflow";
const LOCKED_OVERFLOW: &str = "hidden";

#[derive(Default)]
struct LockState {
    holders: BTreeMap<String, BTreeSet<SessionId>>,
    /// Inline overflow the body had before the first lock, while locked
    saved_overflow: Option<String>,
}

impl LockState {
    fn total(&self) -> usize {
        self.holders.values().map(BTreeSet::len).sum()
    }
}

/// Which shared states a holder change flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    /// First holder in, or last holder out, for this class
    class: bool,
    /// First holder in, or last holder out, across all classes
    document: bool,
}

/// Holders per marker class, shared by every session on a document
#[derive(Clone, Default)]
pub struct ScrollLockRegistry {
    state: Rc<RefCell<LockState>>,
}

impl ScrollLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holder_count(&self, class: &str) -> usize {
        self.state
            .borrow()
            .holders
            .get(class)
            .map_or(0, BTreeSet::len)
    }

    pub fn is_locked(&self, class: &str) -> bool {
        self.holder_count(class) > 0
    }

    fn insert(&self, class: &str, owner: SessionId) -> Edge {
        let mut state = self.state.borrow_mut();
        let was_empty = state.total() == 0;
        let set = state.holders.entry(class.to_string()).or_default();
        let inserted = set.insert(owner);
        Edge {
            class: inserted && set.len() == 1,
            document: inserted && was_empty,
        }
    }

    fn remove(&self, class: &str, owner: SessionId) -> Edge {
        let mut state = self.state.borrow_mut();
        let Some(set) = state.holders.get_mut(class) else {
            return Edge {
                class: false,
                document: false,
            };
        };
        let removed = set.remove(&owner);
        let class_empty = set.is_empty();
        if class_empty {
            state.holders.remove(class);
        }
        Edge {
            class: removed && class_empty,
            document: removed && state.total() == 0,
        }
    }

    fn save_overflow(&self, value: Option<String>) {
        self.state.borrow_mut().saved_overflow = value;
    }

    fn take_overflow(&self) -> Option<String> {
        self.state.borrow_mut().saved_overflow.take()
    }
}

/// A held scroll lock. Releases on drop.
pub struct ScrollLockGuard<H: Host> {
    host: H,
    owner: SessionId,
    class: String,
}

impl<H: Host> ScrollLockGuard<H> {
    /// Registers `owner` as a holder and locks the body if it is the first.
    ///
    /// Returns `None` when the host has no body to lock.
    pub fn acquire(host: &H, owner: SessionId, class: &str) -> Option<Self> {
        let Some(body) = host.body() else {
            warn!("{owner}: no document body, scroll lock skipped");
            return None;
        };

        let registry = host.scroll_locks();
        let edge = registry.insert(class, owner);
        if edge.document {
            registry.save_overflow(host.style_property(&body, OVERFLOW));
            host.set_style_property(&body, OVERFLOW, Some(LOCKED_OVERFLOW));
            debug!("{owner}: scroll lock engaged");
        }
        if edge.class {
            host.add_class(&body, class);
        } else {
            debug!("{owner}: joined existing scroll lock ({class})");
        }

        Some(Self {
            host: host.clone(),
            owner,
            class: class.to_string(),
        })
    }

    pub fn owner(&self) -> SessionId {
        self.owner
    }
}

impl<H: Host> Drop for ScrollLockGuard<H> {
    fn drop(&mut self) {
        let registry = self.host.scroll_locks();
        let edge = registry.remove(&self.class, self.owner);
        let Some(body) = self.host.body() else {
            return;
        };
        if edge.class {
            self.host.remove_class(&body, &self.class);
        }
        if edge.document {
            let previous = registry.take_overflow();
            self.host
                .set_style_property(&body, OVERFLOW, previous.as_deref());
            debug!("{}: scroll lock released", self.owner);
        } else {
            debug!("{}: left scroll lock, still held by others", self.owner);
        }
    }
}
