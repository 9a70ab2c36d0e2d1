//! The self-rescheduling frame loop: run until the cancellation token flips.

use crate::input::PointerTracker;
use crate::render;
use hero_core::{Scene, SceneAnimator};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: SceneAnimator,
    pub tracker: PointerTracker,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
}

impl FrameContext {
    /// One frame: read the latest pointer reading, advance the animator,
    /// apply the resulting snapshot to the GPU.
    pub fn frame(&mut self) {
        let pointer = self.tracker.get();
        let Some(tf) = self.animator.advance(pointer) else {
            return;
        };
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&tf) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Start the requestAnimationFrame chain. Each iteration checks the
/// cancellation token first and simply does not reschedule once it is set,
/// so teardown leaves no pending callback behind.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>, cancel: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancel.get() {
            // stop rescheduling; the chain ends here
            return;
        }
        ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
