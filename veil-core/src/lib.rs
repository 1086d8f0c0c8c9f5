//! veil-core - Lifecycle core of the veil overlay dialog
//!
//! Host-agnostic: everything here works against the [`Host`] and
//! [`MountTarget`] traits. The Dioxus component in `veil-ui` supplies the
//! browser implementations; tests use [`memory::MemoryHost`].

pub mod a11y;
pub mod chrome;
pub mod config;
pub mod error;
pub mod host;
pub mod ids;
pub mod listener;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod relocator;
pub mod scroll_lock;
pub mod session;

pub use a11y::{annotate, DialogSemantics};
pub use chrome::{compose, Section};
pub use config::{ChromeFlags, CloseButtonLayout, DismissPolicy, ModalConfig};
pub use error::ModalError;
pub use host::{DocumentEvent, EventCallback, EventKind, Host};
pub use ids::{ModalIds, ResolvedIds, SessionId};
pub use listener::{BackdropRef, CloseHandler, CloseRequest, ListenerGuard};
pub use relocator::{MountSlot, MountTarget, Relocator};
pub use scroll_lock::{ScrollLockGuard, ScrollLockRegistry, SCROLL_LOCK_CLASS};
pub use session::{EffectDelta, EffectSet, Session, SessionBuilder, SessionInputs};
pub use veil_common::{CloseButtonAlignment, ModalRole, ModalSize};
