use std::time::{Duration, Instant};

use crate::dropdown::{HoverMenu, CLOSE_DELAY};

#[test]
fn enter_trigger_opens_immediately() {
    let mut menu = HoverMenu::new();
    menu.enter_trigger(2);
    assert_eq!(menu.open_index(), Some(2));
    assert!(menu.is_open(2));
}

#[test]
fn switching_siblings_closes_previous_without_delay() {
    let mut menu = HoverMenu::new();
    menu.enter_trigger(0);
    menu.enter_trigger(1);
    assert!(!menu.is_open(0));
    assert!(menu.is_open(1));
}

#[test]
fn reentering_within_delay_never_closes() {
    let now = Instant::now();
    let mut menu = HoverMenu::new();
    menu.enter_trigger(0);
    menu.leave(now);
    menu.enter_content();

    assert!(!menu.poll(now + CLOSE_DELAY + Duration::from_millis(1)));
    assert!(menu.is_open(0));
}

#[test]
fn reentering_trigger_cancels_pending_close() {
    let now = Instant::now();
    let mut menu = HoverMenu::new();
    menu.enter_trigger(0);
    menu.leave(now);
    menu.enter_trigger(0);

    assert!(!menu.poll(now + CLOSE_DELAY));
    assert!(menu.is_open(0));
}

#[test]
fn close_fires_exactly_once_after_delay() {
    let now = Instant::now();
    let mut menu = HoverMenu::new();
    menu.enter_trigger(0);
    menu.leave(now);

    // Just before the deadline nothing happens.
    assert!(!menu.poll(now + CLOSE_DELAY - Duration::from_millis(1)));
    assert!(menu.is_open(0));

    assert!(menu.poll(now + CLOSE_DELAY));
    assert_eq!(menu.open_index(), None);

    // The consumed deadline cannot fire again.
    assert!(!menu.poll(now + CLOSE_DELAY * 2));
}

#[test]
fn leave_without_open_menu_schedules_nothing() {
    let now = Instant::now();
    let mut menu = HoverMenu::new();
    menu.leave(now);
    assert!(!menu.poll(now + CLOSE_DELAY));
    assert_eq!(menu.open_index(), None);
}
