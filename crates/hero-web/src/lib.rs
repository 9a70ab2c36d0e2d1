#![cfg(target_arch = "wasm32")]
//! WASM entry point for the hero background scene.
//!
//! The page's orchestration layer (loading sequence, scroll effects) owns the
//! lifecycle: it constructs a [`HeroScene`] against a canvas element, calls
//! `init()` once the loading sequence completes, forwards resizes, and calls
//! `destroy()` on teardown. Everything in between runs on the
//! requestAnimationFrame loop.

use hero_core::SceneAnimator;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

use input::PointerTracker;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web loaded");
    Ok(())
}

type CtxSlot = Rc<RefCell<Option<Rc<RefCell<frame::FrameContext>>>>>;

/// Owns the scene for one canvas. Initialization is idempotent; after
/// `destroy` the instance is spent and a new one must be constructed.
#[wasm_bindgen]
pub struct HeroScene {
    canvas: web::HtmlCanvasElement,
    tracker: PointerTracker,
    cancel: Rc<Cell<bool>>,
    init_started: Cell<bool>,
    ctx: CtxSlot,
}

#[wasm_bindgen]
impl HeroScene {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<HeroScene, JsValue> {
        let document = web::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("missing hero canvas"))?
            .dyn_into::<web::HtmlCanvasElement>()?;
        Ok(HeroScene {
            canvas,
            tracker: PointerTracker::default(),
            cancel: Rc::new(Cell::new(false)),
            init_started: Cell::new(false),
            ctx: Rc::new(RefCell::new(None)),
        })
    }

    /// Build the scene and start the frame loop. A second call is a no-op.
    pub fn init(&self) {
        if self.init_started.replace(true) {
            return;
        }
        let canvas = self.canvas.clone();
        let tracker = self.tracker.clone();
        let cancel = self.cancel.clone();
        let ctx_slot = self.ctx.clone();
        spawn_local(async move {
            let t0 = Instant::now();
            dom::sync_canvas_backing_size(&canvas);
            let (vw, vh) = dom::window_inner_size();

            let mut animator = SceneAnimator::new();
            animator.init(vw, vh, &mut StdRng::from_entropy());
            let Some(scene) = animator.scene() else {
                return;
            };
            let gpu = frame::init_gpu(&canvas, scene).await;
            if cancel.get() {
                // destroyed while the adapter request was in flight
                if let Some(g) = gpu {
                    g.dispose();
                }
                return;
            }

            events::wire_pointer(tracker.clone());

            let ctx = Rc::new(RefCell::new(frame::FrameContext {
                animator,
                tracker,
                canvas: canvas.clone(),
                gpu,
            }));
            *ctx_slot.borrow_mut() = Some(ctx.clone());

            let resize_ctx = ctx.clone();
            let resize_canvas = canvas.clone();
            events::wire_resize(move || {
                apply_resize(&resize_canvas, &resize_ctx);
            });

            frame::start_loop(ctx, cancel);
            log::info!("hero scene started in {} ms", t0.elapsed().as_millis());
        });
    }

    /// Recompute the camera aspect and surface size for the current canvas
    /// dimensions. Entity counts are never regenerated here.
    #[wasm_bindgen(js_name = handleResize)]
    pub fn handle_resize(&self) {
        if let Some(ctx) = self.ctx.borrow().as_ref() {
            apply_resize(&self.canvas, ctx);
        }
    }

    /// Cancel the frame loop and release every scene and GPU resource.
    pub fn destroy(&self) {
        self.cancel.set(true);
        if let Some(ctx) = self.ctx.borrow_mut().take() {
            let mut c = ctx.borrow_mut();
            c.animator.destroy();
            if let Some(gpu) = c.gpu.take() {
                let released = gpu.dispose();
                log::info!("[gpu] released {released} buffers");
            }
        }
    }
}

fn apply_resize(canvas: &web::HtmlCanvasElement, ctx: &Rc<RefCell<frame::FrameContext>>) {
    dom::sync_canvas_backing_size(canvas);
    let (vw, vh) = dom::window_inner_size();
    let mut c = ctx.borrow_mut();
    c.animator.resize(vw, vh);
    if let Some(g) = &mut c.gpu {
        g.resize_if_needed(canvas.width(), canvas.height());
    }
}
