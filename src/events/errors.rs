use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-level catch-all: log uncaught errors and keep the rest of the page
/// interactive.
pub fn wire(window: &web::Window) -> Listener {
    Listener::new(window, "error", |ev: web::Event| {
        let message = ev
            .dyn_ref::<web::ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_else(|| ev.type_());
        log::warn!("Non-critical error caught: {}", message);
        ev.prevent_default();
    })
}
