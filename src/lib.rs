#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod config;
mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod menu;
mod nav;
mod notify;
mod preferences;
mod render;
mod reveal;
mod site;
mod storage;
mod styles;

thread_local! {
    static SITE: RefCell<Option<site::Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(mount);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        mount();
    }
    Ok(())
}

/// Attach the behavior layer to the current document. No-op when already
/// mounted.
#[wasm_bindgen]
pub fn mount() {
    if SITE.with(|s| s.borrow().is_some()) {
        log::info!("already mounted");
        return;
    }
    match site::Site::mount() {
        Ok(site) => SITE.with(|s| *s.borrow_mut() = Some(site)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Detach everything `mount` attached: listeners, animation loop, observers
/// and pending notification timers.
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|s| s.borrow_mut().take());
    drop(site);
}
