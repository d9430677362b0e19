#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use backdrop_core::{Lifecycle, ParticleField, PointerTracker};
use glam::Vec2;
use rand::Rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod anim;
mod canvas;
mod constants;
mod dom;
mod effects;
mod events;
mod flash;
mod frame;
mod schedule;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
    dom::sync_canvas_backing_size(&canvas);

    let profile = events::current_motion_profile(&window);
    let extent = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let seed: u64 = rand::thread_rng().gen();
    let field = ParticleField::new(extent, profile, seed);
    let painter = canvas::CanvasPainter::new(&canvas)?;

    let lifecycle = Rc::new(RefCell::new(Lifecycle::new()));
    let pointer = Rc::new(RefCell::new(PointerTracker::new()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas: canvas.clone(),
        field,
        painter,
        pointer: pointer.clone(),
    }));
    let runner = Rc::new(frame::Runner::new(
        lifecycle.clone(),
        frame_ctx.clone(),
        flash::AmbientFlash::new(document.clone()),
    ));

    // Lifecycle signals and inputs.
    events::wire_page_visibility(&document, runner.clone());
    events::wire_field_visibility(&canvas, runner.clone())?;
    events::wire_pointer(&canvas, pointer, lifecycle);
    events::wire_resize(frame_ctx);
    events::wire_unload(runner.clone());

    // Peripheral page effects.
    effects::wire_reveals(&document)?;
    effects::wire_nav(&window, &document);
    effects::wire_magnetic(&document);
    effects::wire_counters(&document)?;
    effects::wire_smooth_scroll(&document);
    effects::wire_form_mock(&document);

    // Seed the gate with the real tab state; the intersection observer
    // reports the canvas half shortly after.
    runner.page_visibility_changed(!document.hidden());

    Ok(())
}
