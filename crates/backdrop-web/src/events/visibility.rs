use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::FIELD_VISIBLE_THRESHOLD;
use crate::frame::Runner;

/// Tab focus feeds the page-level half of the lifecycle gate.
pub fn wire_page_visibility(document: &web::Document, runner: Rc<Runner>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        runner.page_visibility_changed(!doc.hidden());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Canvas intersection feeds the element-level half of the gate. The
/// observer also delivers the initial on-screen state shortly after load.
pub fn wire_field_visibility(
    canvas: &web::HtmlCanvasElement,
    runner: Rc<Runner>,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                runner.field_visibility_changed(entry.is_intersecting());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FIELD_VISIBLE_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    observer.observe(canvas);
    callback.forget();
    Ok(())
}
