use crate::constants::{ANCHOR_SELECTOR, NAV_LINK_SELECTOR};
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth-scroll clicks on in-page `#fragment` links. Nav links are left to
/// the navigation controller.
pub fn wire(document: &web::Document) -> Listener {
    let doc = document.clone();
    Listener::new(document, "click", move |ev: web::Event| {
        let Some(origin) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let Some(anchor) = origin.closest(ANCHOR_SELECTOR).ok().flatten() else {
            return;
        };
        if anchor.matches(NAV_LINK_SELECTOR).unwrap_or(false) {
            return;
        }
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        // a bare "#" is not a valid selector
        if href.len() < 2 {
            return;
        }
        ev.prevent_default();
        match doc.query_selector(&href) {
            Ok(Some(target)) => {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            Ok(None) => log::debug!("[scroll] no target for {}", href),
            Err(e) => log::warn!("[scroll] bad anchor {}: {:?}", href, e),
        }
    })
}
