pub mod pointer;
pub mod visibility;

pub use pointer::wire_pointer;
pub use visibility::{wire_field_visibility, wire_page_visibility};

use std::cell::RefCell;
use std::rc::Rc;

use backdrop_core::MotionProfile;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MOBILE_BREAKPOINT_PX;
use crate::frame::{FrameContext, Runner};

/// Probe the motion profile: reduced-motion preference plus a small-viewport
/// check. Read at init and again on every rebuild.
pub fn current_motion_profile(window: &web::Window) -> MotionProfile {
    let reduced = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    let constrained = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w < MOBILE_BREAKPOINT_PX)
        .unwrap_or(false);
    MotionProfile::select(reduced, constrained)
}

pub fn current_motion_profile_or_full() -> MotionProfile {
    web::window()
        .map(|w| current_motion_profile(&w))
        .unwrap_or(MotionProfile::Full)
}

/// Window resize discards and respawns the batch; the loop keeps whatever
/// run state it had.
pub fn wire_resize(ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().rebuild();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Page teardown cancels the pending frame and timers for good.
pub fn wire_unload(runner: Rc<Runner>) {
    let closure = Closure::wrap(Box::new(move || {
        runner.shutdown();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
