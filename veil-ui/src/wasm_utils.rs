//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure
//! alive for as long as it is attached. `closure.forget()` does that by
//! leaking, which also leaves the listener attached forever.
//!
//! Instead the closure is stored in a struct that removes the listener in
//! `Drop`, tying the listener's lifetime to Rust ownership:
//!
//! ```ignore
//! // Attached here
//! let listener = DocumentEventListener::new(document, "keydown", callback);
//!
//! // Removed here
//! drop(listener);
//! ```
//!
//! `WebHost` hands these out as its listener handles, so the dialog session
//! removes them simply by dropping its guards.

use wasm_bindgen_x::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    /// Attaches `callback` for `event_name` on the document.
    ///
    /// Returns `None` if the browser rejected the registration.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            document,
            event_name,
            callback,
        })
    }

    pub fn event_name(&self) -> &'static str {
        self.event_name
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
