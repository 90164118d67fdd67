use crate::constants::CANVAS_ID;
use landing_core::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Defaults, overridden by `data-*` attributes on `<body>` and then on the
/// background canvas (the canvas wins).
pub fn from_document(document: &web::Document) -> SiteConfig {
    let mut config = SiteConfig::default();
    let body = document.body();
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    for el in [body, canvas].into_iter().flatten() {
        let dataset = el.dataset();
        for key in SiteConfig::OVERRIDE_KEYS {
            if let Some(value) = dataset.get(key) {
                if let Err(e) = config.apply_override(key, &value) {
                    log::warn!("[config] {}", e);
                }
            }
        }
    }
    config
}
