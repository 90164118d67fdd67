// Host-side tests for keyboard navigation mapping.

use landing_core::*;

#[test]
fn action_for_key_maps_navigation_keys() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::CloseMenu));
    assert_eq!(action_for_key("ArrowLeft"), Some(KeyAction::FocusPrev));
    assert_eq!(action_for_key("ArrowRight"), Some(KeyAction::FocusNext));
}

#[test]
fn action_for_key_ignores_other_keys() {
    for key in ["ArrowUp", "ArrowDown", "Enter", "Tab", " ", "a", "Esc", ""] {
        assert_eq!(action_for_key(key), None, "key {:?}", key);
    }
}

#[test]
fn arrow_right_from_last_wraps_to_first() {
    assert_eq!(cycle_focus(3, 4, KeyAction::FocusNext), Some(0));
    assert_eq!(cycle_focus(1, 4, KeyAction::FocusNext), Some(2));
}

#[test]
fn arrow_left_from_first_wraps_to_last() {
    assert_eq!(cycle_focus(0, 4, KeyAction::FocusPrev), Some(3));
    assert_eq!(cycle_focus(2, 4, KeyAction::FocusPrev), Some(1));
}

#[test]
fn single_link_cycles_to_itself() {
    assert_eq!(cycle_focus(0, 1, KeyAction::FocusNext), Some(0));
    assert_eq!(cycle_focus(0, 1, KeyAction::FocusPrev), Some(0));
}

#[test]
fn cycle_focus_rejects_out_of_range_and_non_focus_actions() {
    assert_eq!(cycle_focus(0, 0, KeyAction::FocusNext), None);
    assert_eq!(cycle_focus(5, 4, KeyAction::FocusPrev), None);
    assert_eq!(cycle_focus(1, 4, KeyAction::CloseMenu), None);
}

#[test]
fn escape_closes_open_menu_and_keeps_closed_menu_closed() {
    let action = action_for_key("Escape").unwrap();
    assert_eq!(MenuState::Open.apply(action), MenuState::Closed);
    assert_eq!(MenuState::Closed.apply(action), MenuState::Closed);
}

#[test]
fn arrow_keys_leave_menu_state_alone() {
    for key in ["ArrowLeft", "ArrowRight"] {
        let action = action_for_key(key).unwrap();
        assert_eq!(MenuState::Open.apply(action), MenuState::Open, "key {}", key);
        assert_eq!(MenuState::Closed.apply(action), MenuState::Closed, "key {}", key);
    }
}
