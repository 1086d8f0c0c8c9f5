//! Overlay dialog driven by a caller-owned open signal
//!
//! The component never flips `is_open` itself. Escape, backdrop clicks and
//! the close controls all funnel into `on_close`; the caller decides.
//!
//! Document-wide effects (scroll lock, escape and backdrop-click listeners)
//! live in a `veil_core::Session`. An effect keyed on the effect inputs
//! reconciles the session, so the listeners follow `is_open` and the
//! dismissal props exactly. Unmounting tears the session down synchronously
//! in `use_drop`.
//!
//! The backdrop element is handed to the session from `onmounted`; only a
//! click whose target is that exact node closes the dialog.
//!
//! The markup is relocated into the nearest `ModalRoot` (or the `portal`
//! prop) from an effect. Without either it renders in place, which still
//! works but can be clipped by an ancestor with `overflow: hidden`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use tracing::{error, warn};
use veil_core::{
    annotate, compose, ChromeFlags, CloseButtonAlignment, CloseButtonLayout, DialogSemantics,
    DismissPolicy, ModalConfig, ModalIds, ModalRole, ModalSize, Relocator, ResolvedIds, Section,
    Session,
};

use super::button::ChromelessButton;
use super::icons::XIcon;
use super::portal::{use_root_portal, PortalTarget};
use crate::theme::{use_modal_theme, ModalTheme};
use crate::web_host::WebHost;

type SharedSession = Rc<RefCell<Session<WebHost>>>;
type SharedRelocator = Rc<RefCell<Option<Relocator<PortalTarget>>>>;

/// Close handler for the session's document listeners.
///
/// Those listeners run from wasm-bindgen, outside the Dioxus runtime, so
/// the runtime is restored before calling into the event handler.
fn close_request(on_close: EventHandler<()>) -> impl Fn() + 'static {
    let runtime = Runtime::current();
    move || {
        let _guard = RuntimeGuard::new(runtime.clone());
        on_close.call(());
    }
}

#[component]
pub fn Modal(
    /// Controls whether the dialog is open
    is_open: ReadSignal<bool>,
    /// Called when the dialog asks to close (Escape, backdrop, close controls)
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] size: ModalSize,
    #[props(default = true)] header: bool,
    #[props(default = true)] footer: bool,
    #[props(into, default = "Modal Header".to_string())] header_content: String,
    #[props(into, default = "Modal Footer".to_string())] footer_content: String,
    #[props(default = true)] show_close_icon: bool,
    #[props(default = true)] show_close_button: bool,
    #[props(default)] close_button_alignment: CloseButtonAlignment,
    #[props(default)] close_button_full_width: bool,
    #[props(default)] full_screen: bool,
    #[props(default = true)] close_on_backdrop_click: bool,
    #[props(default = true)] close_on_esc: bool,
    /// Disable background scrolling while open
    #[props(default = true)]
    lock_scroll: bool,
    /// Panel id. Read once, on mount.
    #[props(default)]
    id: Option<String>,
    #[props(default)] content_id: Option<String>,
    #[props(default)] backdrop_id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] content_class: Option<String>,
    #[props(default)] backdrop_class: Option<String>,
    #[props(default)] modal_style: Option<String>,
    #[props(default)] content_style: Option<String>,
    #[props(default)] backdrop_style: Option<String>,
    #[props(default)] role: ModalRole,
    /// Accessible name when `header` is off
    #[props(default)]
    aria_label: Option<String>,
    /// Where to relocate the markup. Defaults to the enclosing `ModalRoot`.
    #[props(default)]
    portal: Option<PortalTarget>,
) -> Element {
    let config = ModalConfig {
        size,
        role,
        dismiss: DismissPolicy {
            on_escape: close_on_esc,
            on_backdrop_click: close_on_backdrop_click,
        },
        chrome: ChromeFlags {
            close_icon: show_close_icon,
            header,
            footer,
            close_button: show_close_button,
            close_button_layout: CloseButtonLayout {
                alignment: close_button_alignment,
                full_width: close_button_full_width,
            },
            full_screen,
        },
        ids: ModalIds {
            root: id,
            content: content_id,
            backdrop: backdrop_id,
        },
        lock_scroll,
        aria_label,
    };
    let theme = use_modal_theme();
    let root_portal = use_root_portal();
    let target = portal.or(root_portal);

    let session: Option<SharedSession> = use_hook(|| {
        let built = Session::builder(WebHost)
            .close_handler(close_request(on_close))
            .ids(config.ids.clone())
            .scroll_lock_class(theme.scroll_lock.clone())
            .build();
        match built {
            Ok(session) => Some(Rc::new(RefCell::new(session))),
            Err(e) => {
                error!("Modal not rendered: {e}");
                None
            }
        }
    });
    let relocator: SharedRelocator = use_hook(|| Rc::new(RefCell::new(None)));

    use_hook(|| {
        if target.is_none() {
            warn!("Modal has no ModalRoot or portal; rendering in place");
        }
    });

    // Reconcile only when the effect inputs actually change
    let open = is_open();
    let session_for_effect = session.clone();
    use_effect(use_reactive(
        (&config.inputs(open),),
        move |(inputs,)| {
            if let Some(ref session) = session_for_effect {
                session.borrow_mut().reconcile(inputs);
            }
        },
    ));

    let session_for_drop = session.clone();
    let relocator_for_drop = relocator.clone();
    use_drop(move || {
        if let Some(ref session) = session_for_drop {
            session.borrow_mut().teardown();
        }
        relocator_for_drop.borrow_mut().take();
    });

    let session_id = session.as_ref().map(|session| {
        let session = session.borrow();
        session.set_close_handler(close_request(on_close));
        session.id()
    });

    let markup = match (&session, open) {
        (Some(session), true) => {
            let ids = session.borrow().ids().clone();
            let view = DialogView {
                semantics: annotate(
                    &ids,
                    &config.chrome,
                    config.role,
                    config.aria_label.as_deref(),
                ),
                sections: compose(&config.chrome),
                ids,
                session: session.clone(),
                theme,
                size: config.size,
                full_screen: config.chrome.full_screen,
                header_content,
                footer_content,
                class,
                content_class,
                backdrop_class,
                modal_style,
                content_style,
                backdrop_style,
            };
            Some(dialog_markup(&view, &children, on_close))
        }
        _ => None,
    };

    // The portal is written after render, never during it
    let relocator_for_effect = relocator.clone();
    use_effect(use_reactive(
        (&markup, &target),
        move |(markup, target)| {
            let mut relocator = relocator_for_effect.borrow_mut();
            let (Some(owner), Some(target)) = (session_id, target) else {
                relocator.take();
                return;
            };
            let relocator = relocator.get_or_insert_with(|| Relocator::new(owner, target));
            relocator.retarget(target);
            match markup {
                Some(markup) => relocator.sync(true, move || markup),
                None => relocator.detach(),
            }
        },
    ));

    if target.is_some() {
        return rsx! {};
    }
    rsx! {
        {markup}
    }
}

/// Everything the markup needs, resolved for one render
struct DialogView {
    ids: ResolvedIds,
    session: SharedSession,
    semantics: DialogSemantics,
    sections: Vec<Section>,
    theme: ModalTheme,
    size: ModalSize,
    full_screen: bool,
    header_content: String,
    footer_content: String,
    class: Option<String>,
    content_class: Option<String>,
    backdrop_class: Option<String>,
    modal_style: Option<String>,
    content_style: Option<String>,
    backdrop_style: Option<String>,
}

/// Backdrop followed by the panel. The two are siblings, so a click inside
/// the panel can never target the backdrop.
fn dialog_markup(view: &DialogView, children: &Element, on_close: EventHandler<()>) -> Element {
    let backdrop_id = view.ids.backdrop.clone();
    let backdrop_class = view.theme.backdrop_classes(view.backdrop_class.as_deref());
    let backdrop_style = view.backdrop_style.clone();
    let session = view.session.clone();

    let root_id = view.ids.root.clone();
    let role = view.semantics.role.as_str();
    let aria_modal = view.semantics.aria_modal_value();
    let labelled_by = view.semantics.labelled_by.clone();
    let label = view.semantics.label.clone();
    let described_by = view.semantics.described_by.clone();
    let panel_class =
        view.theme
            .panel_classes(view.size, view.full_screen, view.class.as_deref());
    let panel_style = view.modal_style.clone();

    rsx! {
        div {
            id: "{backdrop_id}",
            class: "{backdrop_class}",
            style: backdrop_style,
            onmounted: move |evt: MountedEvent| {
                let node = evt.data().downcast::<web_sys_x::Element>().cloned();
                session.borrow().set_backdrop(node);
            },
        }
        div {
            id: "{root_id}",
            role,
            aria_modal,
            aria_labelledby: labelled_by,
            aria_label: label,
            aria_describedby: "{described_by}",
            class: "{panel_class}",
            style: panel_style,
            for section in view.sections.iter().copied() {
                {section_markup(view, section, children, on_close)}
            }
        }
    }
}

fn section_markup(
    view: &DialogView,
    section: Section,
    children: &Element,
    on_close: EventHandler<()>,
) -> Element {
    let theme = &view.theme;
    match section {
        Section::CloseIcon => rsx! {
            ChromelessButton {
                class: theme.close_icon.clone(),
                aria_label: "Close dialog".to_string(),
                onclick: move |_| on_close.call(()),
                XIcon {}
            }
        },
        Section::Header => {
            let title_id = view.ids.title.clone();
            let header_class = theme.header.clone();
            let title_class = theme.title.clone();
            let text = view.header_content.clone();
            rsx! {
                div { class: "{header_class}",
                    h2 { id: "{title_id}", class: "{title_class}", "{text}" }
                }
            }
        }
        Section::Body => {
            let content_id = view.ids.content.clone();
            let description_id = view.ids.description.clone();
            let body_class = theme.body_classes(view.content_class.as_deref());
            let body_style = view.content_style.clone();
            rsx! {
                div {
                    id: "{content_id}",
                    class: "{body_class}",
                    style: body_style,
                    div { id: "{description_id}", {children.clone()} }
                }
            }
        }
        Section::Footer => {
            let footer_id = view.ids.footer.clone();
            let labelled_by = view.semantics.footer_labelled_by.clone();
            let footer_class = theme.footer.clone();
            let text_class = theme.footer_text.clone();
            let text = view.footer_content.clone();
            rsx! {
                div { class: "{footer_class}", aria_labelledby: labelled_by,
                    p { id: "{footer_id}", class: "{text_class}", "{text}" }
                }
            }
        }
        Section::CloseButton(layout) => {
            let wrapper_class = theme.close_button_wrapper_classes(layout);
            rsx! {
                div { class: "{wrapper_class}",
                    ChromelessButton {
                        class: theme.close_button.clone(),
                        aria_label: "Close".to_string(),
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
