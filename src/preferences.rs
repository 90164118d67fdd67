//! Theme and language toggles. Startup restore replays the same toggles a
//! click would, so DOM updates live in one place.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::site::{SharedState, SiteState};
use landing_core::{load_saved, Language, Theme};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
    if let Some(button) = dom::query_one(document, THEME_TOGGLE_SELECTOR) {
        button.set_text_content(Some(theme.button_glyph()));
    }
}

fn localize_element(el: &web::Element, text: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_placeholder(text);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_placeholder(text);
    } else {
        el.set_text_content(Some(text));
    }
}

pub fn apply_language(document: &web::Document, lang: Language) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", lang.as_str());
        _ = root.set_attribute("dir", lang.dir());
    }
    let mut updated = 0usize;
    for el in dom::query_all(document, LOCALIZED_SELECTOR) {
        match el.get_attribute(lang.data_attr()) {
            Some(text) if !text.is_empty() => {
                localize_element(&el, &text);
                updated += 1;
            }
            _ => {}
        }
    }
    if let Some(button) = dom::query_one(document, LANG_TOGGLE_SELECTOR) {
        button.set_text_content(Some(lang.toggle_label()));
    }
    log::debug!("[prefs] localized {} nodes to {}", updated, lang);
}

pub fn toggle_theme(state: &mut SiteState) {
    let theme = state.prefs.toggle_theme();
    apply_theme(&state.document, theme);
    if let Err(e) = state.prefs.save_theme(&mut state.store) {
        log::warn!("[prefs] {}", e);
    }
    log::info!("[prefs] theme={}", theme);
}

pub fn toggle_language(state: &mut SiteState) {
    let lang = state.prefs.toggle_language();
    apply_language(&state.document, lang);
    if let Err(e) = state.prefs.save_language(&mut state.store) {
        log::warn!("[prefs] {}", e);
    }
    log::info!("[prefs] language={}", lang);
}

/// Bring the page to the stored preferences by replaying toggles.
pub fn restore(state: &mut SiteState) {
    let saved = load_saved(&state.store);
    let toggles = state.prefs.toggles_to_reach(&saved);
    if toggles.theme {
        toggle_theme(state);
    }
    if toggles.language {
        toggle_language(state);
    }
}

pub fn wire(state: &SharedState) -> Vec<Listener> {
    let document = state.borrow().document.clone();
    let mut out = Vec::new();
    if let Some(button) = dom::query_one(&document, THEME_TOGGLE_SELECTOR) {
        let st = state.clone();
        out.push(Listener::new(&button, "click", move |_| {
            toggle_theme(&mut st.borrow_mut());
        }));
    } else {
        log::warn!("[prefs] missing {}", THEME_TOGGLE_SELECTOR);
    }
    if let Some(button) = dom::query_one(&document, LANG_TOGGLE_SELECTOR) {
        let st = state.clone();
        out.push(Listener::new(&button, "click", move |_| {
            toggle_language(&mut st.borrow_mut());
        }));
    } else {
        log::warn!("[prefs] missing {}", LANG_TOGGLE_SELECTOR);
    }
    out
}
