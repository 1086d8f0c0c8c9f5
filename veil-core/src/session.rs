//! Global side-effect synchronizer
//!
//! A [`Session`] never owns the open flag. Each call to
//! [`Session::reconcile`] computes the effect set the current inputs call
//! for, diffs it against what is installed, removes the surplus and then
//! installs what is missing. Every installed effect is a guard, so dropping
//! the session releases all of them on any exit path.

use std::rc::Rc;

use tracing::debug;

use crate::config::DismissPolicy;
use crate::error::ModalError;
use crate::host::{EventKind, Host};
use crate::ids::{ModalIds, ResolvedIds, SessionId};
use crate::listener::{
    backdrop_click_handler, escape_handler, BackdropRef, CloseHandler, CloseRequest,
    ListenerGuard,
};
use crate::scroll_lock::{ScrollLockGuard, SCROLL_LOCK_CLASS};

/// Inputs the effect set is a function of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInputs {
    pub open: bool,
    pub dismiss: DismissPolicy,
    pub lock_scroll: bool,
}

impl SessionInputs {
    pub fn closed() -> Self {
        Self::open_with(DismissPolicy::default()).with_open(false)
    }

    pub fn open_with(dismiss: DismissPolicy) -> Self {
        Self {
            open: true,
            dismiss,
            lock_scroll: true,
        }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_scroll_lock(mut self, lock_scroll: bool) -> Self {
        self.lock_scroll = lock_scroll;
        self
    }
}

/// Which document-wide effects are (or should be) active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectSet {
    pub scroll_lock: bool,
    pub escape: bool,
    pub backdrop_click: bool,
}

impl EffectSet {
    pub fn desired(inputs: &SessionInputs) -> Self {
        Self {
            scroll_lock: inputs.open && inputs.lock_scroll,
            escape: inputs.open && inputs.dismiss.on_escape,
            backdrop_click: inputs.open && inputs.dismiss.on_backdrop_click,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.scroll_lock && !self.escape && !self.backdrop_click
    }
}

/// What one reconcile pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectDelta {
    pub removed: EffectSet,
    pub installed: EffectSet,
}

impl EffectDelta {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.installed.is_empty()
    }
}

/// Builder for [`Session`]. A close handler is mandatory.
pub struct SessionBuilder<H: Host> {
    host: H,
    close: Option<CloseHandler>,
    ids: ModalIds,
    scroll_lock_class: String,
}

impl<H: Host> SessionBuilder<H> {
    pub fn close_handler(mut self, handler: impl Fn() + 'static) -> Self {
        self.close = Some(Rc::new(handler));
        self
    }

    pub fn ids(mut self, ids: ModalIds) -> Self {
        self.ids = ids;
        self
    }

    pub fn scroll_lock_class(mut self, class: impl Into<String>) -> Self {
        self.scroll_lock_class = class.into();
        self
    }

    pub fn build(self) -> Result<Session<H>, ModalError> {
        let close = self.close.ok_or(ModalError::MissingCloseHandler)?;
        self.ids.validate()?;

        let id = SessionId::next();
        let ids = ResolvedIds::new(&self.ids, id);
        ids.validate()?;
        debug!("{id}: created");

        Ok(Session {
            id,
            ids,
            host: self.host,
            scroll_lock_class: self.scroll_lock_class,
            close: CloseRequest::new(close),
            backdrop: BackdropRef::default(),
            scroll_lock: None,
            escape: None,
            backdrop_click: None,
        })
    }
}

/// One dialog instance's hold on document-wide effects
pub struct Session<H: Host> {
    id: SessionId,
    ids: ResolvedIds,
    host: H,
    scroll_lock_class: String,
    close: CloseRequest,
    backdrop: BackdropRef<H::Node>,
    scroll_lock: Option<ScrollLockGuard<H>>,
    escape: Option<ListenerGuard<H>>,
    backdrop_click: Option<ListenerGuard<H>>,
}

impl<H: Host> Session<H> {
    pub fn builder(host: H) -> SessionBuilder<H> {
        SessionBuilder {
            host,
            close: None,
            ids: ModalIds::default(),
            scroll_lock_class: SCROLL_LOCK_CLASS.to_string(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn ids(&self) -> &ResolvedIds {
        &self.ids
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Effects currently installed
    pub fn active(&self) -> EffectSet {
        EffectSet {
            scroll_lock: self.scroll_lock.is_some(),
            escape: self.escape.is_some(),
            backdrop_click: self.backdrop_click.is_some(),
        }
    }

    /// Swaps the close handler without touching installed listeners
    pub fn set_close_handler(&self, handler: impl Fn() + 'static) {
        self.close.replace(Rc::new(handler));
    }

    /// Records the backdrop node of the mounted markup. `None` when the
    /// markup is detached.
    pub fn set_backdrop(&self, node: Option<H::Node>) {
        self.backdrop.set(node);
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop.is_set()
    }

    /// Asks the owner to close, as the explicit close controls do
    pub fn request_close(&self) {
        debug!("{}: close requested", self.id);
        self.close.fire();
    }

    /// Brings installed effects in line with `inputs`.
    ///
    /// Removals complete before any install, so a close edge followed by an
    /// open edge never overlaps two generations of listeners.
    pub fn reconcile(&mut self, inputs: SessionInputs) -> EffectDelta {
        let desired = EffectSet::desired(&inputs);
        if !inputs.open {
            self.backdrop.set(None);
        }
        let removed = self.remove_surplus(desired);
        let installed = self.install_missing(desired);
        EffectDelta { removed, installed }
    }

    /// Releases every effect. Equivalent to reconciling with the dialog closed.
    pub fn teardown(&mut self) -> EffectSet {
        self.remove_surplus(EffectSet::default())
    }

    fn remove_surplus(&mut self, desired: EffectSet) -> EffectSet {
        let mut removed = EffectSet::default();

        if !desired.backdrop_click && self.backdrop_click.take().is_some() {
            debug!("{}: backdrop click listener removed", self.id);
            removed.backdrop_click = true;
        }
        if !desired.escape && self.escape.take().is_some() {
            debug!("{}: escape listener removed", self.id);
            removed.escape = true;
        }
        if !desired.scroll_lock && self.scroll_lock.take().is_some() {
            removed.scroll_lock = true;
        }

        removed
    }

    fn install_missing(&mut self, desired: EffectSet) -> EffectSet {
        let mut installed = EffectSet::default();

        if desired.scroll_lock && self.scroll_lock.is_none() {
            self.scroll_lock =
                ScrollLockGuard::acquire(&self.host, self.id, &self.scroll_lock_class);
            installed.scroll_lock = self.scroll_lock.is_some();
        }

        if desired.escape && self.escape.is_none() {
            self.escape = ListenerGuard::install(
                &self.host,
                self.id,
                EventKind::KeyDown,
                escape_handler(self.close.clone()),
            );
            if self.escape.is_some() {
                debug!("{}: escape listener installed", self.id);
                installed.escape = true;
            }
        }

        if desired.backdrop_click && self.backdrop_click.is_none() {
            self.backdrop_click = ListenerGuard::install(
                &self.host,
                self.id,
                EventKind::Click,
                backdrop_click_handler(self.backdrop.clone(), self.close.clone()),
            );
            if self.backdrop_click.is_some() {
                debug!("{}: backdrop click listener installed", self.id);
                installed.backdrop_click = true;
            }
        }

        installed
    }
}

impl<H: Host> Drop for Session<H> {
    fn drop(&mut self) {
        let released = self.teardown();
        if released.is_empty() {
            debug!("{}: destroyed", self.id);
        } else {
            debug!("{}: destroyed while open, released {:?}", self.id, released);
        }
    }
}
