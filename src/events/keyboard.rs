use crate::constants::NAV_LINK_SELECTOR;
use crate::dom::{self, Listener};
use crate::menu;
use crate::site::{SharedState, SiteState};
use landing_core::{action_for_key, cycle_focus, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes the mobile menu; Left/Right cycle focus through nav links
/// while one of them has focus.
pub fn handle_keydown(ev: &web::KeyboardEvent, state: &mut SiteState) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::CloseMenu => menu::apply_key(state, action),
        KeyAction::FocusPrev | KeyAction::FocusNext => {
            let links = dom::query_all(&state.document, NAV_LINK_SELECTOR);
            let Some(focused) = state.document.active_element() else {
                return;
            };
            let Some(current) = links.iter().position(|l| *l == focused) else {
                return;
            };
            if let Some(next) = cycle_focus(current, links.len(), action) {
                ev.prevent_default();
                if let Some(link) = links[next].dyn_ref::<web::HtmlElement>() {
                    _ = link.focus();
                }
            }
        }
    }
}

pub fn wire(window: &web::Window, state: &SharedState) -> Listener {
    let st = state.clone();
    Listener::new(window, "keydown", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(kev, &mut st.borrow_mut());
        }
    })
}
