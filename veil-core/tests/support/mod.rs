#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use veil_core::memory::{modal_fragment, MemoryHost, MemoryMount, NodeId};
use veil_core::{compose, ModalConfig, Relocator, Session};

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// A dialog wired the way the component wires it: one session, one
/// relocator, caller-owned open flag.
pub struct TestDialog {
    pub host: MemoryHost,
    pub config: ModalConfig,
    pub session: Session<MemoryHost>,
    pub relocator: Relocator<MemoryMount>,
    pub close_requests: Rc<Cell<u32>>,
    open: bool,
}

impl TestDialog {
    pub fn new(host: &MemoryHost, config: ModalConfig) -> Self {
        let body = host.body_node().unwrap();
        Self::mounted_at(host, config, body)
    }

    pub fn mounted_at(host: &MemoryHost, config: ModalConfig, mount: NodeId) -> Self {
        tracing_init();
        let close_requests = Rc::new(Cell::new(0));
        let counter = close_requests.clone();
        let session = Session::builder(host.clone())
            .close_handler(move || counter.set(counter.get() + 1))
            .ids(config.ids.clone())
            .build()
            .unwrap();
        let relocator = Relocator::new(session.id(), host.mount_point(mount));

        Self {
            host: host.clone(),
            config,
            session,
            relocator,
            close_requests,
            open: false,
        }
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        self.sync();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Re-runs the reaction with the current open flag and config
    pub fn sync(&mut self) {
        let ids = self.session.ids().clone();
        let sections = compose(&self.config.chrome);
        self.relocator
            .sync(self.open, || modal_fragment(&ids, &sections));
        // Markup is rebuilt on every sync, so the backdrop node is recaptured
        self.session.set_backdrop(self.backdrop());
        self.session.reconcile(self.config.inputs(self.open));
    }

    /// This dialog's own backdrop node, first root of its fragment
    pub fn backdrop(&self) -> Option<NodeId> {
        self.relocator.slot()?.roots().first().copied()
    }

    pub fn panel(&self) -> Option<NodeId> {
        self.relocator.slot()?.roots().get(1).copied()
    }

    pub fn close_requests(&self) -> u32 {
        self.close_requests.get()
    }
}

/// Owner that honors close requests by flipping its flag, like a parent
/// component holding the open signal.
pub fn honor_close_requests(dialog: &mut TestDialog, seen: &mut u32) {
    if dialog.close_requests() > *seen {
        *seen = dialog.close_requests();
        dialog.set_open(false);
    }
}
