use std::cell::RefCell;
use std::rc::Rc;

use backdrop_core::{Lifecycle, PointerTracker};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map a client-space coordinate onto the canvas backing store, accounting
/// for the CSS-to-backing scale.
fn client_to_canvas_px(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            x_css / w * canvas.width() as f32,
            y_css / h * canvas.height() as f32,
        )
    } else {
        Vec2::ZERO
    }
}

/// Track the pointer for the repulsion field. Updates are dropped while the
/// loop is stopped; leaving the page clears the tracker.
pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<PointerTracker>>,
    lifecycle: Rc<RefCell<Lifecycle>>,
) {
    wire_pointermove(canvas, tracker.clone(), lifecycle.clone());
    wire_touchmove(canvas, tracker.clone(), lifecycle);
    wire_pointerleave(tracker);
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<PointerTracker>>,
    lifecycle: Rc<RefCell<Lifecycle>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = client_to_canvas_px(&canvas, ev.client_x() as f32, ev.client_y() as f32);
        let running = lifecycle.borrow().is_running();
        tracker.borrow_mut().record(pos, running);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<PointerTracker>>,
    lifecycle: Rc<RefCell<Lifecycle>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // First touch only; multi-touch gestures are not a pointer.
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let pos = client_to_canvas_px(&canvas, touch.client_x() as f32, touch.client_y() as f32);
        let running = lifecycle.borrow().is_running();
        tracker.borrow_mut().record(pos, running);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(tracker: Rc<RefCell<PointerTracker>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        tracker.borrow_mut().clear();
    }) as Box<dyn FnMut(_)>);
    if let Some(document) = crate::dom::window_document() {
        _ = document
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
