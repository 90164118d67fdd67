use crate::constants::{CANVAS_ID, REDUCED_MOTION_QUERY};
use crate::dom::{self, Listener};
use crate::render::CanvasRenderer;
use anyhow::anyhow;
use gloo_timers::callback::Timeout;
use landing_core::{ParticleField, SiteConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub renderer: CanvasRenderer,
    pub config: SiteConfig,
    pub rng: StdRng,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.field.step();
        self.renderer.draw(&self.field);
    }

    /// Rebuild the whole field for a new viewport size.
    pub fn respawn(&mut self, width: f32, height: f32) {
        self.field.respawn(width, height, &self.config, &mut self.rng);
        log::info!(
            "[background] {}x{} -> {} particles",
            width,
            height,
            self.field.particles.len()
        );
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the requestAnimationFrame loop. Dropping it stops the loop.
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
        if let (Some(id), Some(w)) = (self.frame_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure -> tick Rc cycle
        self.tick.borrow_mut().take();
        log::debug!("[background] loop stopped");
    }
}

fn request_frame(tick: &TickClosure, frame_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => frame_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let cancelled = Rc::new(Cell::new(false));
    let frame_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let frame_id_tick = frame_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_id_tick.set(None);
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &frame_id_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &frame_id);
    AnimationHandle {
        cancelled,
        frame_id,
        tick,
    }
}

/// Resize handling: the canvas follows the viewport immediately, the particle
/// field is rebuilt once resizing settles.
pub struct ResizeWatcher {
    _listener: Listener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

pub fn watch_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
    debounce_ms: u32,
) -> ResizeWatcher {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let pending_listener = pending.clone();
    let listener = Listener::new(window, "resize", move |_| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let ctx = frame_ctx.clone();
        // replacing the previous timeout cancels it
        *pending_listener.borrow_mut() = Some(Timeout::new(debounce_ms, move || {
            ctx.borrow_mut().respawn(w, h);
        }));
    });
    ResizeWatcher {
        _listener: listener,
        _pending: pending,
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Set up the particle background. `Ok(None)` when there is no canvas or the
/// user prefers reduced motion.
pub fn start_background(
    document: &web::Document,
    config: &SiteConfig,
) -> anyhow::Result<Option<(AnimationHandle, ResizeWatcher)>> {
    let Some(el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("[background] missing #{}", CANVAS_ID);
        return Ok(None);
    };
    if dom::prefers_reduced_motion(REDUCED_MOTION_QUERY) {
        log::info!("[background] reduced motion requested; not animating");
        return Ok(None);
    }
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
    let renderer = CanvasRenderer::new(context_2d(&canvas)?);

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(w, h, config, &mut rng);
    log::info!(
        "[background] {}x{} with {} particles",
        w,
        h,
        field.particles.len()
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field,
        renderer,
        config: config.clone(),
        rng,
    }));
    let resize = watch_resize(&window, canvas, frame_ctx.clone(), config.resize_debounce_ms);
    let animation = start_loop(frame_ctx);
    Ok(Some((animation, resize)))
}
