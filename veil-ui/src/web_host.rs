//! Browser implementation of the dialog host
//!
//! The document is looked up on every call rather than captured at
//! construction: sessions are created during render, and touching
//! `web_sys_x::window()` during render breaks the desktop bridge. Lookups
//! happen only inside effects and listener callbacks.

use tracing::trace;
use veil_core::{DocumentEvent, EventCallback, EventKind, Host, ScrollLockRegistry};
use wasm_bindgen_x::JsCast;

use crate::wasm_utils::DocumentEventListener;

thread_local! {
    /// Scroll-lock holders for the one browser document
    static SCROLL_LOCKS: ScrollLockRegistry = ScrollLockRegistry::new();
}

/// The current browser document. No-op where there is none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WebHost;

impl WebHost {
    fn document() -> Option<web_sys_x::Document> {
        web_sys_x::window()?.document()
    }

    pub fn is_available() -> bool {
        Self::document().is_some()
    }
}

fn event_property(event: &wasm_bindgen_x::JsValue, name: &str) -> Option<wasm_bindgen_x::JsValue> {
    js_sys_x::Reflect::get(event, &name.into()).ok()
}

impl Host for WebHost {
    type Node = web_sys_x::Element;
    type Listener = DocumentEventListener;

    fn body(&self) -> Option<web_sys_x::Element> {
        Self::document()?.body().map(Into::into)
    }

    fn add_class(&self, node: &web_sys_x::Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &web_sys_x::Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn style_property(&self, node: &web_sys_x::Element, name: &str) -> Option<String> {
        let value = node
            .dyn_ref::<web_sys_x::HtmlElement>()?
            .style()
            .get_property_value(name)
            .ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_style_property(&self, node: &web_sys_x::Element, name: &str, value: Option<&str>) {
        let Some(element) = node.dyn_ref::<web_sys_x::HtmlElement>() else {
            return;
        };
        let style = element.style();
        let _ = match value {
            Some(value) => style.set_property(name, value),
            None => style.remove_property(name).map(|_| ()),
        };
    }

    fn listen(
        &self,
        kind: EventKind,
        mut callback: EventCallback<web_sys_x::Element>,
    ) -> Option<DocumentEventListener> {
        let document = Self::document()?;

        match kind {
            EventKind::KeyDown => {
                DocumentEventListener::new(document, kind.as_str(), move |event| {
                    let Some(key) = event_property(&event, "key").and_then(|k| k.as_string())
                    else {
                        trace!("keydown without a key property");
                        return;
                    };
                    callback(DocumentEvent::KeyDown { key });
                })
            }
            EventKind::Click => DocumentEventListener::new(document, kind.as_str(), move |event| {
                let target = event_property(&event, "target")
                    .and_then(|t| t.dyn_into::<web_sys_x::Element>().ok());
                callback(DocumentEvent::Click { target });
            }),
        }
    }

    fn scroll_locks(&self) -> ScrollLockRegistry {
        SCROLL_LOCKS.with(Clone::clone)
    }
}
