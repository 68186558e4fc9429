//! Tests for dialog coordination and the scroll lock.

use portico::dialog::{DialogController, DialogId, DialogRegistry};
use portico::host::MemoryPage;

fn setup() -> (DialogController, MemoryPage) {
    let page = MemoryPage::with_dialogs(["login-modal", "register-modal", "auth-modal"]);
    let mut registry = DialogRegistry::new();
    for id in ["login-modal", "register-modal", "auth-modal", "not-on-page"] {
        registry.register(id, &page);
    }
    (DialogController::new(registry), page)
}

fn id(s: &str) -> DialogId {
    DialogId::from(s)
}

fn visible_count(controller: &DialogController) -> usize {
    controller
        .registry()
        .descriptors()
        .iter()
        .filter(|d| d.visible)
        .count()
}

#[test]
fn test_missing_dialog_is_not_registered() {
    let (controller, _) = setup();
    assert_eq!(controller.registry().descriptors().len(), 3);
    assert!(!controller.registry().contains(&id("not-on-page")));
}

#[test]
fn test_open_locks_scroll() {
    let (mut controller, mut page) = setup();
    controller.open(&id("login-modal"), &mut page);
    assert!(page.is_visible("login-modal"));
    assert!(page.scroll_locked());
}

#[test]
fn test_open_already_open_dialog_changes_nothing() {
    let (mut controller, mut page) = setup();
    controller.open(&id("login-modal"), &mut page);
    let before = controller.registry().descriptors().to_vec();

    controller.open(&id("login-modal"), &mut page);
    assert_eq!(controller.registry().descriptors(), before.as_slice());
    assert_eq!(page.visible_dialogs(), vec![id("login-modal")]);
    assert!(page.scroll_locked());
}

#[test]
fn test_open_second_dialog_preempts_first() {
    let (mut controller, mut page) = setup();
    controller.open(&id("login-modal"), &mut page);
    controller.open(&id("register-modal"), &mut page);

    assert_eq!(controller.registry().visible(), Some(&id("register-modal")));
    assert!(!page.is_visible("login-modal"));
    assert!(page.is_visible("register-modal"));
    assert_eq!(page.visible_dialogs().len(), 1);
    assert!(page.scroll_locked());
}

#[test]
fn test_close_last_dialog_releases_scroll() {
    let (mut controller, mut page) = setup();
    controller.open(&id("login-modal"), &mut page);
    controller.close(&id("login-modal"), &mut page);
    assert!(!controller.is_any_open());
    assert!(!page.scroll_locked());
}

#[test]
fn test_close_other_dialog_keeps_scroll_locked() {
    let (mut controller, mut page) = setup();
    controller.open(&id("login-modal"), &mut page);
    controller.close(&id("register-modal"), &mut page);
    assert!(page.is_visible("login-modal"));
    assert!(page.scroll_locked());
}

#[test]
fn test_close_already_closed_is_unchanged() {
    let (mut controller, mut page) = setup();
    controller.open(&id("register-modal"), &mut page);
    controller.close(&id("login-modal"), &mut page);
    let before = controller.registry().descriptors().to_vec();
    controller.close(&id("login-modal"), &mut page);
    assert_eq!(controller.registry().descriptors(), before.as_slice());
}

#[test]
fn test_close_all_from_any_state() {
    let (mut controller, mut page) = setup();
    controller.close_all(&mut page);
    assert!(!controller.is_any_open());
    assert!(!page.scroll_locked());

    controller.open(&id("auth-modal"), &mut page);
    controller.close_all(&mut page);
    assert!(!controller.is_any_open());
    assert!(page.visible_dialogs().is_empty());
    assert!(!page.scroll_locked());
}

#[test]
fn test_unknown_ids_are_noops() {
    let (mut controller, mut page) = setup();
    controller.open(&id("nope"), &mut page);
    assert!(!controller.is_any_open());
    assert!(page.lock_history().is_empty());

    controller.open(&id("login-modal"), &mut page);
    controller.close(&id("nope"), &mut page);
    assert!(page.is_visible("login-modal"));
    assert!(page.scroll_locked());
}

#[test]
fn test_switch_keeps_scroll_locked_throughout() {
    let (mut controller, mut page) = setup();
    controller.open(&id("login-modal"), &mut page);
    controller.switch_to(&id("login-modal"), &id("register-modal"), &mut page);
    controller.switch_to(&id("register-modal"), &id("login-modal"), &mut page);

    assert!(page.lock_history().iter().all(|&locked| locked));
    assert!(page.is_visible("login-modal"));
    assert!(!page.is_visible("register-modal"));
}

#[test]
fn test_at_most_one_visible_after_any_sequence() {
    let (mut controller, mut page) = setup();
    let ids = ["login-modal", "register-modal", "auth-modal", "nope"];

    // Deterministic pseudo-random walk over every operation.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let target = id(ids[(seed % 4) as usize]);
        let other = id(ids[((seed >> 4) % 4) as usize]);
        match (seed >> 8) % 4 {
            0 => controller.open(&target, &mut page),
            1 => controller.close(&target, &mut page),
            2 => controller.close_all(&mut page),
            _ => controller.switch_to(&target, &other, &mut page),
        }
        assert!(visible_count(&controller) <= 1);
        assert!(page.visible_dialogs().len() <= 1);
        assert_eq!(page.scroll_locked(), controller.is_any_open());
    }
}
