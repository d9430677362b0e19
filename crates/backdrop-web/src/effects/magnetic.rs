//! Magnetic buttons: `[data-magnetic]` elements lean toward the pointer
//! while it hovers them and snap back when it leaves.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::anim;
use crate::constants::{MAGNET_RADIUS_PX, MAGNET_STRENGTH};

pub fn wire_magnetic(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all("[data-magnetic]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
            wire_one(el);
        }
    }
}

fn wire_one(el: web::HtmlElement) {
    let el_move = el.clone();
    let move_closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = el_move.get_bounding_client_rect();
        let center_x = (rect.left() + rect.width() / 2.0) as f32;
        let center_y = (rect.top() + rect.height() / 2.0) as f32;
        let (ox, oy) = anim::magnet_offset(
            ev.client_x() as f32 - center_x,
            ev.client_y() as f32 - center_y,
            MAGNET_RADIUS_PX,
            MAGNET_STRENGTH,
        );
        _ = el_move
            .style()
            .set_property("transform", &format!("translate({ox:.1}px, {oy:.1}px)"));
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointermove", move_closure.as_ref().unchecked_ref());
    move_closure.forget();

    let el_leave = el.clone();
    let leave_closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        _ = el_leave.style().set_property("transform", "translate(0, 0)");
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerleave", leave_closure.as_ref().unchecked_ref());
    leave_closure.forget();
}
