//! Ambient flash: every few seconds a random `[data-flash]` element briefly
//! gets a `flaring` class. The timer reschedules itself with a fresh random
//! delay after each firing and is gated by the same lifecycle as the render
//! loop, so a hidden page never flashes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{FLASH_DECAY_MS, FLASH_DELAY_MIN_MS, FLASH_DELAY_SPAN_MS};
use crate::schedule::Timeout;

pub struct AmbientFlash {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    decay: Rc<RefCell<Option<Timeout>>>,
}

impl AmbientFlash {
    pub fn new(document: web::Document) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let decay: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let pending_tick = pending.clone();
        let tick_inner = tick.clone();
        let decay_tick = decay.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            fire(&document, &decay_tick);
            if let Some(id) = schedule(&tick_inner) {
                pending_tick.set(Some(id));
            }
        }) as Box<dyn FnMut()>));

        Self {
            pending,
            tick,
            decay,
        }
    }

    /// Idempotent: a timer is pending or it is not.
    pub fn start(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(id) = schedule(&self.tick) {
            self.pending.set(Some(id));
        }
    }

    /// Cancels both the pending firing and any in-flight decay.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
        if let Some(decay) = self.decay.borrow_mut().take() {
            decay.cancel();
        }
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let delay = FLASH_DELAY_MIN_MS + rand::thread_rng().gen_range(0..FLASH_DELAY_SPAN_MS);
    let window = web::window()?;
    let tick_ref = tick.borrow();
    let callback = tick_ref.as_ref()?;
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )
        .ok()
}

fn fire(document: &web::Document, decay: &Rc<RefCell<Option<Timeout>>>) {
    let Ok(nodes) = document.query_selector_all("[data-flash]") else {
        return;
    };
    let len = nodes.length();
    if len == 0 {
        return;
    }
    let pick = rand::thread_rng().gen_range(0..len);
    let Some(node) = nodes.get(pick) else {
        return;
    };
    let Ok(el) = node.dyn_into::<web::Element>() else {
        return;
    };
    _ = el.class_list().add_1("flaring");
    let el_decay = el.clone();
    *decay.borrow_mut() = Timeout::once(FLASH_DECAY_MS, move || {
        _ = el_decay.class_list().remove_1("flaring");
    });
}
