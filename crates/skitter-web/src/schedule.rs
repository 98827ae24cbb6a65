use skitter_core::{Scheduler, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed one-shot scheduler for delayed proximity activation.
/// The returned handle clears the timeout when dropped before firing.
pub struct DomScheduler;

impl Scheduler for DomScheduler {
    fn delay(&self, seconds: f32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let Some(window) = web::window() else {
            return TimerHandle::noop();
        };
        let closure = Closure::once(callback);
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            (seconds * 1000.0) as i32,
        );
        closure.forget();
        match id {
            Ok(id) => TimerHandle::new(Box::new(move || {
                if let Some(window) = web::window() {
                    window.clear_timeout_with_handle(id);
                }
            })),
            Err(e) => {
                log::warn!("[timer] setTimeout failed: {:?}", e);
                TimerHandle::noop()
            }
        }
    }
}
