//! Global listener guards and the close-request channel
//!
//! A guard owns the host registration and a liveness flag. The flag is
//! cleared before the registration is dropped, so an event the host has
//! already queued for a removed listener is ignored instead of producing a
//! second close request.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{trace, warn};

use crate::host::{DocumentEvent, EventKind, Host};
use crate::ids::SessionId;

/// The owner's "please close" callback
pub type CloseHandler = Rc<dyn Fn()>;

/// Shared, replaceable close handler.
///
/// Listeners capture the request, not the handler, so swapping the handler
/// does not require reinstalling listeners.
#[derive(Clone)]
pub struct CloseRequest {
    handler: Rc<RefCell<CloseHandler>>,
}

impl CloseRequest {
    pub fn new(handler: CloseHandler) -> Self {
        Self {
            handler: Rc::new(RefCell::new(handler)),
        }
    }

    pub fn replace(&self, handler: CloseHandler) {
        *self.handler.borrow_mut() = handler;
    }

    /// Invokes the current handler without holding a borrow, so the handler
    /// may replace itself or reconcile the session synchronously.
    pub fn fire(&self) {
        let handler = self.handler.borrow().clone();
        handler();
    }
}

/// An installed document-level listener. Removes itself on drop.
pub struct ListenerGuard<H: Host> {
    kind: EventKind,
    alive: Rc<Cell<bool>>,
    _registration: H::Listener,
}

impl<H: Host> ListenerGuard<H> {
    /// Installs `on_event` for `kind` on the host.
    ///
    /// Returns `None` if the host refused the registration.
    pub fn install(
        host: &H,
        owner: SessionId,
        kind: EventKind,
        mut on_event: impl FnMut(&DocumentEvent<H::Node>) + 'static,
    ) -> Option<Self> {
        let alive = Rc::new(Cell::new(true));
        let flag = alive.clone();

        let registration = host.listen(
            kind,
            Box::new(move |event| {
                if flag.get() {
                    on_event(&event);
                } else {
                    trace!("{owner}: dropped {} event for removed listener", kind.as_str());
                }
            }),
        );

        let Some(registration) = registration else {
            warn!("{owner}: host refused {} listener", kind.as_str());
            return None;
        };

        Some(Self {
            kind,
            alive,
            _registration: registration,
        })
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl<H: Host> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// Listener body for escape-key dismissal
pub fn escape_handler<N>(close: CloseRequest) -> impl FnMut(&DocumentEvent<N>) {
    move |event| {
        if let DocumentEvent::KeyDown { key } = event {
            if key == "Escape" {
                close.fire();
            }
        }
    }
}

/// The backdrop node of one session, captured when its markup mounts.
/// Clicks match this node, never a node found by id.
pub struct BackdropRef<N> {
    node: Rc<RefCell<Option<N>>>,
}

impl<N> Clone for BackdropRef<N> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<N> Default for BackdropRef<N> {
    fn default() -> Self {
        Self {
            node: Rc::new(RefCell::new(None)),
        }
    }
}

impl<N: PartialEq> BackdropRef<N> {
    pub fn set(&self, node: Option<N>) {
        *self.node.borrow_mut() = node;
    }

    pub fn is_set(&self) -> bool {
        self.node.borrow().is_some()
    }

    pub fn matches(&self, target: &N) -> bool {
        self.node.borrow().as_ref() == Some(target)
    }
}

/// Listener body for backdrop-click dismissal.
///
/// Fires only when the click target is the captured backdrop node itself.
/// Clicks that bubble up from the panel, land on wrapper elements, or hit
/// another dialog's backdrop never match.
pub fn backdrop_click_handler<N: PartialEq>(
    backdrop: BackdropRef<N>,
    close: CloseRequest,
) -> impl FnMut(&DocumentEvent<N>) {
    move |event| {
        let DocumentEvent::Click {
            target: Some(target),
        } = event
        else {
            return;
        };
        if backdrop.matches(target) {
            close.fire();
        }
    }
}
