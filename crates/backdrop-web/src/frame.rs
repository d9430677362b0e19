use std::cell::{Cell, RefCell};
use std::rc::Rc;

use backdrop_core::{Lifecycle, ParticleField, PointerTracker, Transition};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::CanvasPainter;
use crate::dom;
use crate::events;
use crate::flash::AmbientFlash;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub field: ParticleField,
    pub painter: CanvasPainter,
    pub pointer: Rc<RefCell<PointerTracker>>,
}

impl FrameContext {
    /// One accepted frame: clear the surface, then step the field.
    pub fn frame(&mut self) {
        self.painter.clear(self.canvas.width(), self.canvas.height());
        let pointer = self.pointer.borrow().position();
        self.field.step(pointer, &mut self.painter);
    }

    /// Resize path: resync the backing store, re-read the motion profile,
    /// respawn the batch.
    pub fn rebuild(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        let extent = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let profile = events::current_motion_profile_or_full();
        self.field.rebuild(extent, profile);
    }
}

/// Cancellable requestAnimationFrame chain.
///
/// The pending request id is the single owned handle: stop cancels exactly
/// that request, and a start while one is pending is a no-op, so two loops
/// can never run at once.
pub struct RafLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    pub fn new(lifecycle: Rc<RefCell<Lifecycle>>, ctx: Rc<RefCell<FrameContext>>) -> Self {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle_tick = handle.clone();
        let tick_inner = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            // Top-of-loop gate: a stopped lifecycle simply ends the chain.
            if !lifecycle.borrow().is_running() {
                return;
            }
            ctx.borrow_mut().frame();
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_inner.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    handle_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));
        Self { handle, tick }
    }

    pub fn start(&self) {
        if self.handle.get().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                self.handle.set(Some(id));
            }
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Applies lifecycle transitions to everything the gate governs: the render
/// loop and the ambient flash timer.
pub struct Runner {
    lifecycle: Rc<RefCell<Lifecycle>>,
    raf: RafLoop,
    flash: AmbientFlash,
}

impl Runner {
    pub fn new(
        lifecycle: Rc<RefCell<Lifecycle>>,
        ctx: Rc<RefCell<FrameContext>>,
        flash: AmbientFlash,
    ) -> Self {
        let raf = RafLoop::new(lifecycle.clone(), ctx);
        Self {
            lifecycle,
            raf,
            flash,
        }
    }

    pub fn page_visibility_changed(&self, visible: bool) {
        let transition = self.lifecycle.borrow_mut().set_page_visible(visible);
        self.apply(transition);
    }

    pub fn field_visibility_changed(&self, visible: bool) {
        let transition = self.lifecycle.borrow_mut().set_element_visible(visible);
        self.apply(transition);
    }

    pub fn shutdown(&self) {
        let transition = self.lifecycle.borrow_mut().halt();
        self.apply(transition);
    }

    fn apply(&self, transition: Option<Transition>) {
        match transition {
            Some(Transition::Start) => {
                log::info!("[loop] start");
                self.raf.start();
                self.flash.start();
            }
            Some(Transition::Stop) => {
                log::info!("[loop] stop");
                self.raf.stop();
                self.flash.stop();
            }
            None => {}
        }
    }
}
