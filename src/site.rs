//! The mounted site: shared state plus everything that has to be released on
//! teardown (listeners, animation loop, observers, pending timers).

use crate::config;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::events;
use crate::form;
use crate::frame::{self, AnimationHandle, ResizeWatcher};
use crate::menu;
use crate::nav;
use crate::notify::Notifier;
use crate::preferences;
use crate::reveal::{self, RevealObserver};
use crate::storage::LocalStorage;
use crate::styles;
use anyhow::anyhow;
use landing_core::{FormController, MenuState, NavState, Preferences, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mutable state shared by the event handlers.
pub struct SiteState {
    pub document: web::Document,
    pub config: SiteConfig,
    pub prefs: Preferences,
    pub store: LocalStorage,
    pub nav: NavState,
    pub menu: MenuState,
    pub form: FormController,
}

pub type SharedState = Rc<RefCell<SiteState>>;

pub struct Site {
    state: SharedState,
    notifier: Rc<Notifier>,
    animation: Option<AnimationHandle>,
    resize: Option<ResizeWatcher>,
    reveal: Option<RevealObserver>,
    listeners: Vec<Listener>,
}

fn initial_nav(document: &web::Document) -> NavState {
    let pages = dom::query_all(document, PAGE_SELECTOR);
    let initial = pages
        .iter()
        .find(|p| p.class_list().contains(ACTIVE_CLASS))
        .map(|p| p.id());
    let ids = pages.iter().map(|p| p.id()).filter(|id| !id.is_empty()).collect();
    NavState::new(ids, initial.as_deref())
}

impl Site {
    pub fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;

        styles::inject(&document);
        let config = config::from_document(&document);
        log::info!("[site] config {:?}", config);

        let (animation, resize) = match frame::start_background(&document, &config) {
            Ok(Some((a, r))) => (Some(a), Some(r)),
            Ok(None) => (None, None),
            Err(e) => {
                log::warn!("[background] disabled: {:?}", e);
                (None, None)
            }
        };

        let nav = initial_nav(&document);
        if let Some(id) = nav.active_id() {
            nav::render_pages(&document, id);
        }

        let state = Rc::new(RefCell::new(SiteState {
            nav,
            document: document.clone(),
            config: config.clone(),
            prefs: Preferences::default(),
            store: LocalStorage::open(),
            menu: MenuState::Closed,
            form: FormController::new(),
        }));
        preferences::restore(&mut state.borrow_mut());

        let notifier = Rc::new(Notifier::new(document.clone(), &config));

        let mut listeners = Vec::new();
        listeners.extend(preferences::wire(&state));
        listeners.extend(nav::wire(&state));
        listeners.extend(menu::wire(&state));
        listeners.extend(form::wire(&state, &notifier));
        listeners.push(events::keyboard::wire(&window, &state));
        listeners.push(events::anchors::wire(&document));
        listeners.push(events::errors::wire(&window));

        let reveal = match reveal::observe_cards(&document, &config) {
            Ok(r) => Some(r),
            Err(e) => {
                log::warn!("[reveal] disabled: {:?}", e);
                None
            }
        };

        log::info!("[site] mounted with {} listeners", listeners.len());
        Ok(Self {
            state,
            notifier,
            animation,
            resize,
            reveal,
            listeners,
        })
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Ok(mut st) = self.state.try_borrow_mut() {
            menu::close(&mut st);
            st.form.detach();
        }
        self.notifier.clear();
        self.animation.take();
        self.resize.take();
        self.reveal.take();
        log::info!("[site] torn down");
    }
}
