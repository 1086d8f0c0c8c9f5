//! In-memory document host
//!
//! A small element tree with class lists, a body, document-level listeners
//! and mount targets. Used by the unit and integration tests and exported
//! behind the `test-utils` feature for downstream crates.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::chrome::Section;
use crate::host::{DocumentEvent, EventCallback, EventKind, Host};
use crate::ids::{ResolvedIds, SessionId};
use crate::relocator::{MountSlot, MountTarget};
use crate::scroll_lock::ScrollLockRegistry;

/// Index of an element in a [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

struct NodeData {
    tag: String,
    id: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

struct ListenerEntry {
    key: u64,
    kind: EventKind,
    callback: Rc<RefCell<EventCallback<NodeId>>>,
    removed: Rc<Cell<bool>>,
}

struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    listeners: Vec<ListenerEntry>,
    next_listener_key: u64,
}

impl Document {
    fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            listeners: Vec::new(),
            next_listener_key: 0,
        };
        doc.root = doc.create("html", None);
        doc.body = doc.create("body", None);
        doc.append(doc.root, doc.body);
        doc
    }

    fn create(&mut self, tag: &str, id: Option<&str>) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            parent: None,
            children: Vec::new(),
            classes: BTreeSet::new(),
            styles: BTreeMap::new(),
        });
        node
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.root {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }
}

/// Single-threaded in-memory document. Clones share the same document.
#[derive(Clone)]
pub struct MemoryHost {
    doc: Option<Rc<RefCell<Document>>>,
    locks: ScrollLockRegistry,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            doc: Some(Rc::new(RefCell::new(Document::new()))),
            locks: ScrollLockRegistry::new(),
        }
    }

    /// A host with no document at all, as on a non-browser target
    pub fn without_document() -> Self {
        Self {
            doc: None,
            locks: ScrollLockRegistry::new(),
        }
    }

    fn with_doc<R>(&self, f: impl FnOnce(&Document) -> R) -> Option<R> {
        self.doc.as_ref().map(|doc| f(&doc.borrow()))
    }

    fn with_doc_mut<R>(&self, f: impl FnOnce(&mut Document) -> R) -> Option<R> {
        self.doc.as_ref().map(|doc| f(&mut doc.borrow_mut()))
    }

    pub fn root_node(&self) -> Option<NodeId> {
        self.with_doc(|doc| doc.root)
    }

    pub fn body_node(&self) -> Option<NodeId> {
        self.with_doc(|doc| doc.body)
    }

    /// Creates a detached element.
    ///
    /// # Panics
    /// If the host has no document.
    pub fn create_element(&self, tag: &str, id: Option<&str>) -> NodeId {
        self.with_doc_mut(|doc| doc.create(tag, id))
            .expect("create_element on a host without a document")
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        self.with_doc_mut(|doc| doc.append(parent, child));
    }

    pub fn remove(&self, node: NodeId) {
        self.with_doc_mut(|doc| doc.detach(node));
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.with_doc(|doc| doc.nodes[node.0].children.clone())
            .unwrap_or_default()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.with_doc(|doc| doc.nodes[node.0].parent).flatten()
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.with_doc(|doc| doc.nodes[node.0].tag.clone())
    }

    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.with_doc(|doc| doc.contains(ancestor, node))
            .unwrap_or(false)
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.with_doc(|doc| doc.is_connected(node)).unwrap_or(false)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.with_doc(|doc| doc.nodes[node.0].classes.contains(class))
            .unwrap_or(false)
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.body_node()
            .is_some_and(|body| self.has_class(body, class))
    }

    /// First connected node carrying `id`
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.with_doc(|doc| {
            (0..doc.nodes.len())
                .map(NodeId)
                .find(|n| doc.nodes[n.0].id.as_deref() == Some(id) && doc.is_connected(*n))
        })
        .flatten()
    }

    pub fn body_style(&self, name: &str) -> Option<String> {
        let body = self.body_node()?;
        self.style_property(&body, name)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.with_doc(|doc| doc.listeners.iter().filter(|l| l.kind == kind).count())
            .unwrap_or(0)
    }

    /// Dispatches a `keydown` to every document-level listener
    pub fn press_key(&self, key: &str) {
        self.dispatch(DocumentEvent::KeyDown {
            key: key.to_string(),
        });
    }

    /// Dispatches a `click` targeting `target` to every document-level listener
    pub fn click(&self, target: NodeId) {
        self.dispatch(DocumentEvent::Click {
            target: Some(target),
        });
    }

    /// Listeners removed while the event is in flight are skipped, matching
    /// DOM dispatch semantics.
    fn dispatch(&self, event: DocumentEvent<NodeId>) {
        let kind = event.kind();
        let Some(snapshot) = self.with_doc(|doc| {
            doc.listeners
                .iter()
                .filter(|l| l.kind == kind)
                .map(|l| (l.callback.clone(), l.removed.clone()))
                .collect::<Vec<_>>()
        }) else {
            return;
        };

        for (callback, removed) in snapshot {
            if removed.get() {
                continue;
            }
            let mut callback = callback.borrow_mut();
            (*callback)(event.clone());
        }
    }

    /// Mount target appending under `parent`
    pub fn mount_point(&self, parent: NodeId) -> MemoryMount {
        MemoryMount {
            host: self.clone(),
            parent,
        }
    }

    fn build(&self, spec: &NodeSpec) -> NodeId {
        let node = self.create_element(&spec.tag, spec.id.as_deref());
        self.with_doc_mut(|doc| {
            doc.nodes[node.0].classes.extend(spec.classes.iter().cloned());
        });
        for child in &spec.children {
            let child = self.build(child);
            self.append_child(node, child);
        }
        node
    }
}

impl Host for MemoryHost {
    type Node = NodeId;
    type Listener = MemoryListener;

    fn body(&self) -> Option<NodeId> {
        self.body_node()
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.with_doc_mut(|doc| {
            doc.nodes[node.0].classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.with_doc_mut(|doc| {
            doc.nodes[node.0].classes.remove(class);
        });
    }

    fn style_property(&self, node: &NodeId, name: &str) -> Option<String> {
        self.with_doc(|doc| doc.nodes[node.0].styles.get(name).cloned())
            .flatten()
    }

    fn set_style_property(&self, node: &NodeId, name: &str, value: Option<&str>) {
        self.with_doc_mut(|doc| {
            let styles = &mut doc.nodes[node.0].styles;
            match value {
                Some(value) => {
                    styles.insert(name.to_string(), value.to_string());
                }
                None => {
                    styles.remove(name);
                }
            }
        });
    }

    fn listen(&self, kind: EventKind, callback: EventCallback<NodeId>) -> Option<MemoryListener> {
        let doc = self.doc.clone()?;
        let removed = Rc::new(Cell::new(false));
        let key = {
            let mut d = doc.borrow_mut();
            let key = d.next_listener_key;
            d.next_listener_key += 1;
            d.listeners.push(ListenerEntry {
                key,
                kind,
                callback: Rc::new(RefCell::new(callback)),
                removed: removed.clone(),
            });
            key
        };
        Some(MemoryListener { doc, key, removed })
    }

    fn scroll_locks(&self) -> ScrollLockRegistry {
        self.locks.clone()
    }
}

/// Registration handle for a [`MemoryHost`] listener
pub struct MemoryListener {
    doc: Rc<RefCell<Document>>,
    key: u64,
    removed: Rc<Cell<bool>>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        self.removed.set(true);
        let key = self.key;
        self.doc.borrow_mut().listeners.retain(|l| l.key != key);
    }
}

/// Declarative element description used as relocated content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Backdrop and panel markup for the given sections.
///
/// The two roots are siblings, attached and detached as one fragment.
pub fn modal_fragment(ids: &ResolvedIds, sections: &[Section]) -> Vec<NodeSpec> {
    let backdrop = NodeSpec::new("div").id(&ids.backdrop).class("backdrop");

    let mut panel = NodeSpec::new("div").id(&ids.root).class("panel");
    for section in sections {
        let node = match section {
            Section::CloseIcon => NodeSpec::new("button").class("close-icon"),
            Section::Header => NodeSpec::new("div")
                .class("header")
                .child(NodeSpec::new("h2").id(&ids.title)),
            Section::Body => NodeSpec::new("div")
                .id(&ids.content)
                .class("body")
                .child(NodeSpec::new("div").id(&ids.description)),
            Section::Footer => NodeSpec::new("div")
                .class("footer")
                .child(NodeSpec::new("h2").id(&ids.footer)),
            Section::CloseButton(_) => NodeSpec::new("div")
                .class("close-button-wrapper")
                .child(NodeSpec::new("button").class("close-button")),
        };
        panel = panel.child(node);
    }

    vec![backdrop, panel]
}

/// Mount target that appends content under a fixed parent
#[derive(Clone)]
pub struct MemoryMount {
    host: MemoryHost,
    parent: NodeId,
}

impl PartialEq for MemoryMount {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent
    }
}

impl MountTarget for MemoryMount {
    type Content = Vec<NodeSpec>;
    type Slot = MemorySlot;

    fn attach(&self, _owner: SessionId, content: Vec<NodeSpec>) -> Option<MemorySlot> {
        self.host.doc.as_ref()?;
        let mut slot = MemorySlot {
            host: self.host.clone(),
            parent: self.parent,
            roots: Vec::new(),
        };
        slot.update(content);
        Some(slot)
    }
}

/// Attached fragment. Detaches on drop.
pub struct MemorySlot {
    host: MemoryHost,
    parent: NodeId,
    roots: Vec<NodeId>,
}

impl MemorySlot {
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    fn clear(&mut self) {
        for root in self.roots.drain(..) {
            self.host.remove(root);
        }
    }
}

impl MountSlot for MemorySlot {
    type Content = Vec<NodeSpec>;

    fn update(&mut self, content: Vec<NodeSpec>) {
        self.clear();
        for spec in &content {
            let node = self.host.build(spec);
            self.host.append_child(self.parent, node);
            self.roots.push(node);
        }
    }
}

impl Drop for MemorySlot {
    fn drop(&mut self) {
        self.clear();
    }
}
