use gloo_timers::callback::Timeout;
use landing_core::{NotificationId, NotificationQueue, Severity, SiteConfig, EXIT_ANIMATION};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

struct Toast {
    id: NotificationId,
    element: web::HtmlElement,
    // dropping a Timeout cancels it
    exit: Option<Timeout>,
    removal: Option<Timeout>,
}

impl Toast {
    fn dispose(self) {
        drop(self.exit);
        drop(self.removal);
        self.element.remove();
    }
}

/// Fixed-position toasts that dismiss themselves. At most `notify_cap` are
/// live; the oldest is removed early when a new one would exceed it.
pub struct Notifier {
    document: web::Document,
    lifetime_ms: u32,
    exit_ms: u32,
    queue: RefCell<NotificationQueue>,
    toasts: RefCell<Vec<Toast>>,
}

impl Notifier {
    pub fn new(document: web::Document, config: &SiteConfig) -> Self {
        Self {
            document,
            lifetime_ms: config.notify_lifetime_ms,
            exit_ms: config.notify_exit_ms,
            queue: RefCell::new(NotificationQueue::new(config.notify_cap)),
            toasts: RefCell::new(Vec::new()),
        }
    }

    pub fn notify(self: &Rc<Self>, message: &str, severity: Severity) {
        let pushed = self.queue.borrow_mut().push(message, severity);
        for old in pushed.evicted {
            self.remove_toast(old);
        }

        let element = match self.create_element(message, severity) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[notify] could not show {:?}: {:?}", message, e);
                self.queue.borrow_mut().remove(pushed.id);
                return;
            }
        };

        let id = pushed.id;
        let weak = Rc::downgrade(self);
        let exit = Timeout::new(self.lifetime_ms, move || {
            if let Some(n) = weak.upgrade() {
                n.begin_exit(id);
            }
        });
        self.toasts.borrow_mut().push(Toast {
            id,
            element,
            exit: Some(exit),
            removal: None,
        });
        log::info!(
            "[notify] {:?} {} ({} live)",
            severity,
            message,
            self.live_count()
        );
    }

    fn create_element(
        &self,
        message: &str,
        severity: Severity,
    ) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("no body"))?;
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<web::HtmlElement>()
            .map_err(wasm_bindgen::JsValue::from)?;
        el.set_text_content(Some(message));
        el.set_attribute("style", &severity.css_text())?;
        el.set_attribute("role", "status")?;
        el.set_attribute("aria-live", "polite")?;
        body.append_child(&el)?;
        Ok(el)
    }

    fn begin_exit(self: &Rc<Self>, id: NotificationId) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let mut toasts = self.toasts.borrow_mut();
        let Some(toast) = toasts.iter_mut().find(|t| t.id == id) else {
            return;
        };
        _ = toast.element.style().set_property("animation", EXIT_ANIMATION);
        toast.removal = Some(Timeout::new(self.exit_ms, move || {
            if let Some(n) = weak.upgrade() {
                n.remove_toast(id);
            }
        }));
    }

    fn remove_toast(&self, id: NotificationId) {
        self.queue.borrow_mut().remove(id);
        let toast = {
            let mut toasts = self.toasts.borrow_mut();
            toasts
                .iter()
                .position(|t| t.id == id)
                .map(|pos| toasts.remove(pos))
        };
        if let Some(t) = toast {
            t.dispose();
        }
    }

    pub fn live_count(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Remove every toast and cancel their timers.
    pub fn clear(&self) {
        let toasts: Vec<Toast> = self.toasts.borrow_mut().drain(..).collect();
        for t in toasts {
            self.queue.borrow_mut().remove(t.id);
            t.dispose();
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.clear();
    }
}
