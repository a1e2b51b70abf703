use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub type Task = Box<dyn FnOnce()>;

/// Deferred work on the UI thread.
pub trait Scheduler {
    /// Runs `task` right before the next repaint.
    fn next_frame(&self, task: Task);
    fn after(&self, delay_ms: u32, task: Task);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, task: Task) {
        let Some(window) = web_sys::window() else {
            task();
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            warn!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn after(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;
