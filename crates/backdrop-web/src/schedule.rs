use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot timer with an owned handle.
///
/// Cancelling clears the exact pending callback instead of hoping the
/// closure never fires. Keep the value alive until the timer fires or is
/// cancelled; dropping it earlier would destroy the callback out from under
/// the scheduler.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn once(delay_ms: i32, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = web::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }

    pub fn cancel(self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}
