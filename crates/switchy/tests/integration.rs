//! Integration tests for the switchy facade: the re-exported runtime and
//! widgets working together under the harness.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use switchy::widgets::SwitchToggled;
use switchy::{
    Bound, Color, HeartSwitch, ISwitch, Icon, MorphingSwitch, Switch, SwitchState, TextSwitch,
    ToggleState, Widget,
};
use switchy_test::Harness;

// =============================================================================
// Facade Tests
// =============================================================================

#[test]
fn test_runtime_and_widgets_share_types() {
    let switch = ISwitch::new(true)
        .positive_color(Color::BLUE)
        .on_checked_change(|_| {})
        .test_id("wifi");
    let h = Harness::new(switch);
    h.assert_is_on("#wifi").assert_is_enabled("#wifi");
    assert_eq!(h.root().toggle_state(), Some(ToggleState::On));
    assert_eq!(h.root().track_color(), Color::BLUE);
}

#[test]
fn test_switch_without_callback_has_no_toggle_state() {
    let h = Harness::new(ISwitch::new(true).test_id("wifi"));
    h.assert_not_toggleable("#wifi");
    assert_eq!(h.root().toggle_state(), None);
    assert!(h.root().is_checked());
}

#[test]
fn test_icon_content_converts() {
    let content: switchy::SwitchContent = Icon::Close.into();
    assert_eq!(content.label(), None);
    let content: switchy::SwitchContent = "Off".into();
    assert_eq!(content.label(), Some("Off"));
}

#[test]
fn test_logging_init_is_idempotent() {
    switchy::logging::init("switchy=trace");
    assert!(!switchy::logging::init("switchy=trace"));
}

// =============================================================================
// Hoisted State Tests
// =============================================================================

#[test]
fn test_two_switches_share_one_state() {
    let state = SwitchState::new(false);
    let mut a = Harness::new(Bound::new(TextSwitch::new(false).test_id("a"), state.clone()));
    let b = Bound::new(MorphingSwitch::new(false).test_id("b"), state.clone());
    let mut hb = Harness::new(b);

    a.click("#a");
    assert!(state.get());
    // The second switch sees the change on its next update pass.
    hb.relayout();
    hb.assert_is_on("#b");
}

#[test]
fn test_observer_runs_after_state_write() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let state = SwitchState::new(false);
    let observed = state.clone();
    let bound = Bound::new(HeartSwitch::new(false), state.clone())
        .on_change(move |checked| sink.lock().unwrap().push((checked, observed.get())));
    let mut h = Harness::new(bound);

    h.click("[role=switch]");
    h.click("[role=switch]");
    assert_eq!(*seen.lock().unwrap(), vec![(true, true), (false, false)]);
    assert_eq!(h.take_messages::<SwitchToggled>().len(), 2);
}

proptest! {
    #[test]
    fn prop_bound_state_tracks_click_parity(clicks in 0usize..12) {
        let state = SwitchState::new(false);
        let mut h = Harness::new(Bound::new(ISwitch::new(false), state.clone()));
        for _ in 0..clicks {
            h.click("[role=switch]");
        }
        h.settle();
        prop_assert_eq!(state.get(), clicks % 2 == 1);
        prop_assert_eq!(h.root().is_checked(), clicks % 2 == 1);
        let rest = if clicks % 2 == 1 { 40.0 } else { 0.0 };
        prop_assert_eq!(h.root().widget().thumb_offset(), rest);
    }
}
