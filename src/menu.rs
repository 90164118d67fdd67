use crate::constants::*;
use crate::dom::{self, Listener};
use crate::site::{SharedState, SiteState};
use landing_core::{KeyAction, MenuState, MENU_BARS_OPEN_STYLE, NAV_PANEL_OPEN_STYLE};
use wasm_bindgen::JsCast;
use web_sys as web;

fn nav_panel(document: &web::Document) -> Option<web::HtmlElement> {
    dom::query_one(document, NAV_LINKS_PANEL_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn menu_bars(document: &web::Document) -> Vec<web::HtmlElement> {
    dom::query_one(document, MOBILE_MENU_SELECTOR)
        .map(|m| dom::query_all_in(&m, MOBILE_MENU_BAR_SELECTOR))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Push `menu` to the DOM. Closed clears every inline override.
fn render(document: &web::Document, menu: MenuState) {
    if let Some(panel) = nav_panel(document) {
        if menu.is_open() {
            dom::set_styles(&panel, NAV_PANEL_OPEN_STYLE);
        } else {
            dom::clear_styles(&panel, NAV_PANEL_OPEN_STYLE);
        }
    }
    for (bar, (prop, value)) in menu_bars(document).iter().zip(MENU_BARS_OPEN_STYLE) {
        let style = bar.style();
        if menu.is_open() {
            _ = style.set_property(prop, value);
        } else {
            _ = style.remove_property(prop);
        }
    }
}

pub fn open(state: &mut SiteState) {
    if state.menu.is_open() {
        return;
    }
    state.menu = MenuState::Open;
    render(&state.document, state.menu);
    log::debug!("[menu] open");
}

pub fn close(state: &mut SiteState) {
    if !state.menu.is_open() {
        return;
    }
    state.menu = MenuState::Closed;
    render(&state.document, state.menu);
    log::debug!("[menu] closed");
}

/// Feed a navigation key to the menu; renders only when the state changes.
pub fn apply_key(state: &mut SiteState, action: KeyAction) {
    let next = state.menu.apply(action);
    if next == state.menu {
        return;
    }
    state.menu = next;
    render(&state.document, state.menu);
    log::debug!("[menu] {:?} via {:?}", next, action);
}

pub fn toggle(state: &mut SiteState) {
    match state.menu.toggled() {
        MenuState::Open => open(state),
        MenuState::Closed => close(state),
    }
}

pub fn wire(state: &SharedState) -> Option<Listener> {
    let document = state.borrow().document.clone();
    let Some(button) = dom::query_one(&document, MOBILE_MENU_SELECTOR) else {
        log::warn!("[menu] missing {}", MOBILE_MENU_SELECTOR);
        return None;
    };
    let st = state.clone();
    Some(Listener::new(&button, "click", move |_| {
        toggle(&mut st.borrow_mut());
    }))
}
