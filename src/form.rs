use crate::constants::*;
use crate::dom::{self, Listener};
use crate::notify::Notifier;
use crate::site::SharedState;
use gloo_timers::future::TimeoutFuture;
use landing_core::SendError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Busy-state controls inside the contact form. Any of them may be absent
/// from the markup; the submit flow still runs.
struct SubmitControls {
    button: Option<web::HtmlButtonElement>,
    label: Option<web::HtmlElement>,
    spinner: Option<web::HtmlElement>,
}

impl SubmitControls {
    fn find(form: &web::HtmlFormElement) -> Self {
        let button_el = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten();
        let label = button_el
            .as_ref()
            .and_then(|b| dom::query_html_in(b, BUTTON_TEXT_SELECTOR));
        let spinner = button_el
            .as_ref()
            .and_then(|b| dom::query_html_in(b, LOADING_SELECTOR));
        let button = button_el.and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
        Self {
            button,
            label,
            spinner,
        }
    }

    fn show_busy(&self) {
        if let Some(l) = &self.label {
            _ = l.style().set_property("display", "none");
        }
        if let Some(s) = &self.spinner {
            _ = s.style().set_property("display", "inline-block");
        }
        if let Some(b) = &self.button {
            b.set_disabled(true);
        }
    }

    fn restore(&self, label_text: &str) {
        if let Some(l) = &self.label {
            _ = l.style().set_property("display", "inline");
            l.set_text_content(Some(label_text));
        }
        if let Some(s) = &self.spinner {
            _ = s.style().set_property("display", "none");
        }
        if let Some(b) = &self.button {
            b.set_disabled(false);
        }
    }
}

/// Stand-in for the outbound request: waits `delay_ms` and reports success.
pub async fn send(delay_ms: u32) -> Result<(), SendError> {
    TimeoutFuture::new(delay_ms).await;
    Ok(())
}

fn handle_submit(form: web::HtmlFormElement, state: SharedState, notifier: Rc<Notifier>) {
    let delay_ms = {
        let mut st = state.borrow_mut();
        if let Err(e) = st.form.begin() {
            log::info!("[form] ignored submit: {}", e);
            return;
        }
        st.config.submit_delay_ms
    };
    let controls = SubmitControls::find(&form);
    controls.show_busy();
    log::info!("[form] sending");

    // the notifier lives with the mounted site; a send outliving teardown
    // must not bring a toast back
    let notifier = Rc::downgrade(&notifier);
    spawn_local(async move {
        let outcome = send(delay_ms).await;
        let feedback = {
            let mut st = state.borrow_mut();
            let lang = st.prefs.language;
            st.form.finish(&outcome, lang)
        };
        let (Some(feedback), Some(notifier)) = (feedback, notifier.upgrade()) else {
            log::info!("[form] settled after teardown; no feedback");
            return;
        };
        controls.restore(feedback.button_label);
        notifier.notify(feedback.message, feedback.severity);
        if feedback.reset_fields {
            form.reset();
        }
        log::info!("[form] settled ok={}", outcome.is_ok());
    });
}

pub fn wire(state: &SharedState, notifier: &Rc<Notifier>) -> Option<Listener> {
    let document = state.borrow().document.clone();
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::warn!("[form] missing #{}", CONTACT_FORM_ID);
        return None;
    };
    let st = state.clone();
    let notifier = notifier.clone();
    let form_for_handler = form.clone();
    Some(Listener::new(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        handle_submit(form_for_handler.clone(), st.clone(), notifier.clone());
    }))
}
