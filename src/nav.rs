use crate::constants::*;
use crate::dom::{self, Listener};
use crate::menu;
use crate::site::{SharedState, SiteState};
use landing_core::SiteResult;
use web_sys as web;

/// Section id a nav link points at: `data-page`, else its `#fragment`.
pub fn link_target(link: &web::Element) -> Option<String> {
    if let Some(id) = link.get_attribute(NAV_TARGET_ATTR) {
        return Some(id);
    }
    link.get_attribute("href")
        .and_then(|h| h.strip_prefix('#').map(str::to_string))
        .filter(|id| !id.is_empty())
}

/// Leave `section_id` as the only `.page` carrying the active class.
pub fn render_pages(document: &web::Document, section_id: &str) {
    for page in dom::query_all(document, PAGE_SELECTOR) {
        let cl = page.class_list();
        if page.id() == section_id {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
}

/// Show `section_id` as the single active page and mark `link` active.
/// The caller passes the link that triggered the change.
pub fn show_page(state: &mut SiteState, section_id: &str, link: &web::Element) -> SiteResult<()> {
    state.nav.activate(section_id)?;
    render_pages(&state.document, section_id);
    for other in dom::query_all(&state.document, NAV_LINK_SELECTOR) {
        _ = other.class_list().remove_1(ACTIVE_CLASS);
    }
    _ = link.class_list().add_1(ACTIVE_CLASS);
    menu::close(state);
    log::info!("[nav] page={}", section_id);
    Ok(())
}

pub fn wire(state: &SharedState) -> Vec<Listener> {
    let document = state.borrow().document.clone();
    dom::query_all(&document, NAV_LINK_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let Some(target) = link_target(&link) else {
                log::warn!("[nav] link without target: {:?}", link.outer_html());
                return None;
            };
            let st = state.clone();
            let link_for_handler = link.clone();
            Some(Listener::new(&link, "click", move |ev: web::Event| {
                ev.prevent_default();
                if let Err(e) = show_page(&mut st.borrow_mut(), &target, &link_for_handler) {
                    log::warn!("[nav] {}", e);
                }
            }))
        })
        .collect()
}
