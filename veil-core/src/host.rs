//! The document-like environment a dialog runs in
//!
//! A host provides the process-wide surfaces the dialog touches: a body to
//! lock for scrolling and a global event dispatch surface. Hosts without a
//! document answer `None` everywhere and the dialog degrades to a no-op.

use crate::scroll_lock::ScrollLockRegistry;

/// Global events the dialog listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    Click,
}

impl EventKind {
    /// DOM event type name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::KeyDown => "keydown",
            EventKind::Click => "click",
        }
    }
}

/// A global event as seen by a document-level listener
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent<N> {
    KeyDown { key: String },
    /// `target` is the innermost node that was clicked, if it is an element
    Click { target: Option<N> },
}

impl<N> DocumentEvent<N> {
    pub fn kind(&self) -> EventKind {
        match self {
            DocumentEvent::KeyDown { .. } => EventKind::KeyDown,
            DocumentEvent::Click { .. } => EventKind::Click,
        }
    }
}

pub type EventCallback<N> = Box<dyn FnMut(DocumentEvent<N>)>;

/// Document-like environment.
///
/// Handles are cheap to clone and all clones refer to the same document.
pub trait Host: Clone + 'static {
    /// Element identity. Equality must be node identity, not structural.
    type Node: Clone + PartialEq + 'static;
    /// Registration handle. Dropping it removes the listener.
    type Listener: 'static;

    fn body(&self) -> Option<Self::Node>;

    /// Adding a class that is already present is a no-op
    fn add_class(&self, node: &Self::Node, class: &str);

    /// Removing a class that is absent is a no-op
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Inline style property, `None` when unset
    fn style_property(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Sets an inline style property. `None` removes it.
    fn set_style_property(&self, node: &Self::Node, name: &str, value: Option<&str>);

    fn listen(
        &self,
        kind: EventKind,
        callback: EventCallback<Self::Node>,
    ) -> Option<Self::Listener>;

    /// Scroll-lock holders shared by every session on this document
    fn scroll_locks(&self) -> ScrollLockRegistry;
}
