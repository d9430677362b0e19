//! Peripheral page effects: independent, stateless-per-trigger glue layered
//! on top of the field. Each wiring helper degrades to a no-op when its DOM
//! hook is absent, so partial pages still work.

mod counters;
mod magnetic;

pub use counters::wire_counters;
pub use magnetic::wire_magnetic;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{FORM_PENDING_MS, NAV_ID, NAV_SCROLL_THRESHOLD_PX, REVEAL_THRESHOLD};
use crate::schedule::Timeout;

/// Reveal-on-scroll: `[data-reveal]` elements get `is-visible` the first
/// time they intersect the viewport, then stop being observed.
pub fn wire_reveals(document: &web::Document) -> anyhow::Result<()> {
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
                _ = target.class_list().add_1("is-visible");
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let nodes = document
        .query_selector_all("[data-reveal]")
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

/// Toggle `nav-scrolled` on the nav bar once the page scrolls past the hero
/// fold threshold.
pub fn wire_nav(window: &web::Window, document: &web::Document) {
    let Some(nav) = document.get_element_by_id(NAV_ID) else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scrolled = win.scroll_y().unwrap_or(0.0) > NAV_SCROLL_THRESHOLD_PX;
        let classes = nav.class_list();
        if scrolled {
            _ = classes.add_1("nav-scrolled");
        } else {
            _ = classes.remove_1("nav-scrolled");
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// In-page anchor links scroll smoothly to their target section.
pub fn wire_smooth_scroll(document: &web::Document) {
    let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
        return;
    };
    for i in 0..anchors.length() {
        let Some(node) = anchors.get(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let Some(href) = el.get_attribute("href") else {
            continue;
        };
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            // A bare "#" or missing target falls through to default behavior.
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            ev.prevent_default();
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Mock submission for `form[data-mock-submit]`: no network, just a pending
/// label and a delayed confirmation. The delay handle is owned so a
/// resubmission cancels the previous one.
pub fn wire_form_mock(document: &web::Document) {
    let Some(form_el) = document.query_selector("form[data-mock-submit]").ok().flatten() else {
        return;
    };
    let Ok(form) = form_el.dyn_into::<web::HtmlFormElement>() else {
        return;
    };
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let form_inner = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(button) = form_inner
            .query_selector("button[type='submit']")
            .ok()
            .flatten()
        else {
            return;
        };
        let Ok(button) = button.dyn_into::<web::HtmlElement>() else {
            return;
        };
        button.set_inner_text("Sending…");
        _ = button.set_attribute("disabled", "");

        if let Some(previous) = pending.borrow_mut().take() {
            previous.cancel();
        }
        let form_done = form_inner.clone();
        let button_done = button.clone();
        *pending.borrow_mut() = Timeout::once(FORM_PENDING_MS, move || {
            form_done.reset();
            button_done.set_inner_text("Thanks, talk soon");
            _ = button_done.remove_attribute("disabled");
        });
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
