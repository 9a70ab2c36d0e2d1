//! Document-level event wiring in the usual `Closure::wrap` + `forget` form.

use crate::dom;
use crate::input::PointerTracker;
use hero_core::PointerReading;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire `mousemove` and `touchmove` so the tracker always holds the latest
/// normalized reading. Touch uses the first active touch point; an empty
/// touch list leaves the previous reading in place.
pub fn wire_pointer(tracker: PointerTracker) {
    let Some(window) = web::window() else {
        return;
    };

    let mouse_tracker = tracker.clone();
    let mouse_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (w, h) = dom::window_inner_size();
        mouse_tracker.set(PointerReading::normalize(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w,
            h,
        ));
    }) as Box<dyn FnMut(_)>);
    _ = window
        .add_event_listener_with_callback("mousemove", mouse_closure.as_ref().unchecked_ref());
    mouse_closure.forget();

    let touch_tracker = tracker;
    let touch_closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let (w, h) = dom::window_inner_size();
            touch_tracker.set(PointerReading::normalize(
                touch.client_x() as f32,
                touch.client_y() as f32,
                w,
                h,
            ));
        }
    }) as Box<dyn FnMut(_)>);
    _ = window
        .add_event_listener_with_callback("touchmove", touch_closure.as_ref().unchecked_ref());
    touch_closure.forget();
}

/// Wire the window `resize` event to a handler.
pub fn wire_resize(mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
