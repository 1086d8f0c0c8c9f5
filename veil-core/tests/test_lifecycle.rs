#![cfg(feature = "test-utils")]
mod support;

use support::{honor_close_requests, TestDialog};
use veil_core::memory::MemoryHost;
use veil_core::{EventKind, ModalConfig, Section, SCROLL_LOCK_CLASS};

fn config() -> ModalConfig {
    ModalConfig::new()
}

#[test]
fn test_closed_then_open_then_closed() {
    let host = MemoryHost::new();
    let body = host.body_node().unwrap();
    let mut dialog = TestDialog::new(&host, config());

    // Initially closed: nothing attached, no listeners, no lock
    assert!(host.children(body).is_empty());
    assert_eq!(host.listener_count(EventKind::KeyDown), 0);
    assert_eq!(host.listener_count(EventKind::Click), 0);
    assert!(!host.body_has_class(SCROLL_LOCK_CLASS));

    dialog.set_open(true);
    assert_eq!(host.children(body).len(), 2);
    assert!(dialog.backdrop().is_some());
    assert!(dialog.panel().is_some());
    assert!(host.body_has_class(SCROLL_LOCK_CLASS));
    assert_eq!(host.body_style("overflow").as_deref(), Some("hidden"));
    assert_eq!(host.listener_count(EventKind::KeyDown), 1);
    assert_eq!(host.listener_count(EventKind::Click), 1);

    dialog.set_open(false);
    assert!(host.children(body).is_empty());
    assert!(!host.body_has_class(SCROLL_LOCK_CLASS));
    assert_eq!(host.body_style("overflow"), None);
    assert_eq!(host.listener_count(EventKind::KeyDown), 0);
    assert_eq!(host.listener_count(EventKind::Click), 0);
}

#[test]
fn test_backdrop_click_requests_close_once() {
    let host = MemoryHost::new();
    let mut dialog = TestDialog::new(&host, config());
    dialog.set_open(true);

    host.click(dialog.backdrop().unwrap());
    assert_eq!(dialog.close_requests(), 1);
}

#[test]
fn test_panel_clicks_never_close() {
    let host = MemoryHost::new();
    let mut dialog = TestDialog::new(&host, config());
    dialog.set_open(true);

    let panel = dialog.panel().unwrap();
    host.click(panel);
    for child in host.children(panel) {
        host.click(child);
        for grandchild in host.children(child) {
            host.click(grandchild);
        }
    }
    assert_eq!(dialog.close_requests(), 0);
}

#[test]
fn test_backdrop_click_disabled() {
    let host = MemoryHost::new();
    let mut config = config();
    config.dismiss.on_backdrop_click = false;
    let mut dialog = TestDialog::new(&host, config);
    dialog.set_open(true);

    assert_eq!(host.listener_count(EventKind::Click), 0);
    host.click(dialog.backdrop().unwrap());
    assert_eq!(dialog.close_requests(), 0);
}

#[test]
fn test_escape_disabled_registers_nothing() {
    let host = MemoryHost::new();
    let mut config = config();
    config.dismiss.on_escape = false;
    let mut dialog = TestDialog::new(&host, config);
    dialog.set_open(true);

    assert_eq!(host.listener_count(EventKind::KeyDown), 0);
    host.press_key("Escape");
    assert_eq!(dialog.close_requests(), 0);
}

#[test]
fn test_only_escape_requests_close() {
    let host = MemoryHost::new();
    let mut dialog = TestDialog::new(&host, config());
    dialog.set_open(true);

    for key in ["Enter", " ", "Tab", "q", "Esc", "escape"] {
        host.press_key(key);
    }
    assert_eq!(dialog.close_requests(), 0);

    host.press_key("Escape");
    assert_eq!(dialog.close_requests(), 1);
}

#[test]
fn test_escape_ignored_after_close() {
    let host = MemoryHost::new();
    let mut dialog = TestDialog::new(&host, config());
    dialog.set_open(true);
    dialog.set_open(false);

    host.press_key("Escape");
    assert_eq!(dialog.close_requests(), 0);
}

#[test]
fn test_destroy_while_open_releases_everything() {
    let host = MemoryHost::new();
    let body = host.body_node().unwrap();
    let mut dialog = TestDialog::new(&host, config());
    dialog.set_open(true);

    drop(dialog);
    assert!(host.children(body).is_empty());
    assert!(!host.body_has_class(SCROLL_LOCK_CLASS));
    assert_eq!(host.listener_count(EventKind::KeyDown), 0);
    assert_eq!(host.listener_count(EventKind::Click), 0);
}

#[test]
fn test_owner_honoring_escape_closes_and_cleans_up() {
    let host = MemoryHost::new();
    let mut dialog = TestDialog::new(&host, config());
    let mut seen = 0;
    dialog.set_open(true);

    host.press_key("Escape");
    honor_close_requests(&mut dialog, &mut seen);

    assert!(!dialog.is_open());
    assert!(!host.body_has_class(SCROLL_LOCK_CLASS));
    assert_eq!(host.listener_count(EventKind::KeyDown), 0);

    // A second press after the owner closed has nothing to reach
    host.press_key("Escape");
    assert_eq!(dialog.close_requests(), 1);
}

#[test]
fn test_two_dialogs_share_scroll_lock() {
    let host = MemoryHost::new();
    let mut first = TestDialog::new(&host, config());
    let mut second = TestDialog::new(&host, config());

    first.set_open(true);
    second.set_open(true);
    assert!(host.body_has_class(SCROLL_LOCK_CLASS));

    first.set_open(false);
    assert!(host.body_has_class(SCROLL_LOCK_CLASS));

    second.set_open(false);
    assert!(!host.body_has_class(SCROLL_LOCK_CLASS));
    assert_eq!(host.body_style("overflow"), None);
}

#[test]
fn test_dialog_without_scroll_lock_does_not_mark_body() {
    let host = MemoryHost::new();
    let mut config = config();
    config.lock_scroll = false;
    let mut dialog = TestDialog::new(&host, config);

    dialog.set_open(true);
    assert!(!host.body_has_class(SCROLL_LOCK_CLASS));
    assert_eq!(host.listener_count(EventKind::KeyDown), 1);
}

#[test]
fn test_backdrop_click_only_closes_its_own_dialog() {
    let host = MemoryHost::new();
    let mut first = TestDialog::new(&host, config());
    let mut second = TestDialog::new(&host, config());
    first.set_open(true);
    second.set_open(true);

    host.click(second.backdrop().unwrap());
    assert_eq!(first.close_requests(), 0);
    assert_eq!(second.close_requests(), 1);
}

#[test]
fn test_dialogs_with_the_same_backdrop_id_close_independently() {
    let host = MemoryHost::new();
    let mut config = config();
    config.ids.backdrop = Some("shade".into());
    let mut first = TestDialog::new(&host, config.clone());
    let mut second = TestDialog::new(&host, config);
    first.set_open(true);
    second.set_open(true);
    assert_ne!(first.backdrop(), second.backdrop());

    host.click(first.backdrop().unwrap());
    assert_eq!(first.close_requests(), 1);
    assert_eq!(second.close_requests(), 0);

    host.click(second.backdrop().unwrap());
    assert_eq!(first.close_requests(), 1);
    assert_eq!(second.close_requests(), 1);
}

#[test]
fn test_header_and_footer_hidden() {
    let host = MemoryHost::new();
    let mut config = config();
    config.chrome.header = false;
    config.chrome.footer = false;
    let mut dialog = TestDialog::new(&host, config.clone());
    dialog.set_open(true);

    let ids = dialog.session.ids().clone();
    assert!(host.element_by_id(&ids.title).is_none());
    assert!(host.element_by_id(&ids.footer).is_none());

    let semantics = veil_core::annotate(&ids, &config.chrome, config.role, None);
    for referenced in semantics.referenced_ids() {
        assert!(
            host.element_by_id(referenced).is_some(),
            "aria reference {referenced} points at nothing"
        );
    }
    assert!(!veil_core::compose(&config.chrome).contains(&Section::Header));
}

#[test]
fn test_supplied_ids_are_rendered() {
    let host = MemoryHost::new();
    let mut config = config();
    config.ids.root = Some("confirm-delete".into());
    config.ids.backdrop = Some("confirm-delete-shade".into());
    let mut dialog = TestDialog::new(&host, config);
    dialog.set_open(true);

    assert!(host.element_by_id("confirm-delete").is_some());
    let shade = host.element_by_id("confirm-delete-shade").unwrap();
    host.click(shade);
    assert_eq!(dialog.close_requests(), 1);
}

#[test]
fn test_relocated_under_custom_mount_point() {
    let host = MemoryHost::new();
    let body = host.body_node().unwrap();
    let declaring_parent = host.create_element("div", Some("card"));
    let portal = host.create_element("div", Some("portal"));
    host.append_child(body, declaring_parent);
    host.append_child(body, portal);

    let mut dialog = TestDialog::mounted_at(&host, config(), portal);
    dialog.set_open(true);

    let panel = dialog.panel().unwrap();
    assert!(host.contains(portal, panel));
    assert!(!host.contains(declaring_parent, panel));

    dialog.set_open(false);
    assert!(host.children(portal).is_empty());
}

#[test]
fn test_no_environment_renders_and_installs_nothing() {
    let host = MemoryHost::without_document();
    let real = MemoryHost::new();
    let mut dialog = TestDialog::mounted_at(&host, config(), real.body_node().unwrap());

    dialog.set_open(true);
    assert!(!dialog.relocator.is_attached());
    assert!(dialog.session.active().is_empty());
}
