use crate::accordion::Accordion;

#[test]
fn single_mode_toggles_open_and_closed() {
    let mut accordion = Accordion::single();
    accordion.toggle(1);
    assert!(accordion.is_open(1));

    accordion.toggle(1);
    assert!(!accordion.is_open(1));
    assert!(accordion.open_indices().is_empty());
}

#[test]
fn single_mode_switches_between_panels() {
    let mut accordion = Accordion::single();
    accordion.toggle(0);
    accordion.toggle(2);

    assert!(!accordion.is_open(0));
    assert!(accordion.is_open(2));
    assert_eq!(accordion.open_indices(), vec![2]);
}

#[test]
fn multi_mode_toggles_panels_independently() {
    let mut accordion = Accordion::multi();
    accordion.toggle(0);
    accordion.toggle(3);
    assert!(accordion.is_open(0));
    assert!(accordion.is_open(3));

    accordion.toggle(0);
    assert!(!accordion.is_open(0));
    assert!(accordion.is_open(3));
}

#[test]
fn panel_height_follows_measurement_and_open_state() {
    let mut accordion = Accordion::single();
    accordion.set_measured_height(1, 240.0);

    assert_eq!(accordion.panel_height(1), 0.0);
    accordion.toggle(1);
    assert_eq!(accordion.panel_height(1), 240.0);
}

#[test]
fn invalidated_measurements_fall_back_to_zero_until_remeasured() {
    let mut accordion = Accordion::multi();
    accordion.toggle(0);
    accordion.set_measured_height(0, 120.0);
    assert_eq!(accordion.panel_height(0), 120.0);

    // Async data arrival changed the content; old heights are stale.
    accordion.invalidate_measurements();
    assert_eq!(accordion.panel_height(0), 0.0);

    accordion.set_measured_height(0, 300.0);
    assert_eq!(accordion.panel_height(0), 300.0);
}
