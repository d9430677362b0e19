//! Count-up stats: `[data-count-to]` elements animate from zero the first
//! time they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::anim;
use crate::constants::COUNTER_DURATION_MS;

pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<web::HtmlElement>() {
                    animate(el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let nodes = document
        .query_selector_all("[data-count-to]")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        if let Ok(el) = node.dyn_into::<web::Element>() {
            observer.observe(&el);
        }
    }
    callback.forget();
    Ok(())
}

/// Eased tween on a requestAnimationFrame chain. On completion the chain
/// simply stops rescheduling; the closure stays alive in its Rc cycle, which
/// is the same leak discipline as a forgotten listener.
fn animate(el: web::HtmlElement) {
    let target: u64 = el
        .get_attribute("data-count-to")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let suffix = el.get_attribute("data-count-suffix").unwrap_or_default();
    let started = Instant::now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_inner = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let t = (started.elapsed().as_millis() as f32 / COUNTER_DURATION_MS).min(1.0);
        let value = anim::counter_value(target, t);
        el.set_inner_text(&format!("{}{}", anim::format_grouped(value), suffix));
        if t < 1.0 {
            if let Some(w) = web::window() {
                _ = w.request_animation_frame(
                    tick_inner.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
