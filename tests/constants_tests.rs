// Host-side tests for DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn class_selectors_are_class_selectors() {
    for sel in [
        PAGE_SELECTOR,
        NAV_LINK_SELECTOR,
        NAV_LINKS_PANEL_SELECTOR,
        MOBILE_MENU_SELECTOR,
        THEME_TOGGLE_SELECTOR,
        LANG_TOGGLE_SELECTOR,
        SUBMIT_BUTTON_SELECTOR,
        BUTTON_TEXT_SELECTOR,
        LOADING_SELECTOR,
        CARD_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{}", sel);
        assert!(!sel.contains(' '), "{}", sel);
    }
}

#[test]
fn ids_are_bare() {
    for id in [CANVAS_ID, CONTACT_FORM_ID, STYLE_ELEMENT_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'));
    }
}

#[test]
fn localized_selector_matches_english_attribute() {
    assert_eq!(LOCALIZED_SELECTOR, "[data-en]");
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
