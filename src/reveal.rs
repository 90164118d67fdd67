use crate::constants::CARD_SELECTOR;
use crate::dom;
use anyhow::anyhow;
use landing_core::{RevealTracker, SiteConfig, REVEALED_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Reveals each card once when it scrolls into view, then stops watching it.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

pub fn observe_cards(
    document: &web::Document,
    config: &SiteConfig,
) -> anyhow::Result<RevealObserver> {
    let cards = dom::query_all(document, CARD_SELECTOR);
    let observed = cards.clone();
    let mut tracker = RevealTracker::new();

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = cards.iter().position(|c| *c == target) else {
                    continue;
                };
                if tracker.observe(index, entry.is_intersecting()) {
                    _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                    log::debug!("[reveal] card {}", index);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(config.reveal_root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    for card in &observed {
        observer.observe(card);
    }
    log::info!("[reveal] observing {} cards", observed.len());
    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
