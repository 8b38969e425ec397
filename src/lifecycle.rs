//! Acquire/release plumbing shared by both engines: a single-slot tick
//! scheduler, a liveness flag, and the window scroll listener guard.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub type TickFn = Box<dyn FnOnce()>;

/// Holds at most one pending tick. Scheduling replaces (and cancels)
/// whatever was pending.
pub trait TickScheduler {
    fn schedule(&mut self, delay_ms: u32, tick: TickFn);
    fn cancel(&mut self);
    fn is_pending(&self) -> bool;
}

#[derive(Default)]
pub struct GlooScheduler {
    pending: Option<Timeout>,
}

impl GlooScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickScheduler for GlooScheduler {
    fn schedule(&mut self, delay_ms: u32, tick: TickFn) {
        // Dropping a Timeout clears it on the JS side.
        self.pending = Some(Timeout::new(delay_ms, tick));
    }

    fn cancel(&mut self) {
        drop(self.pending.take());
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Shared "still mounted" flag. Closures scheduled before a stop keep a
/// clone and bail out once it is revoked.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers a window event listener for as long as it lives.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(window: Window, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                window,
                event,
                callback,
            }),
            Err(err) => {
                log::warn!("failed to register '{}' listener: {:?}", event, err);
                None
            }
        }
    }

    pub fn scroll<F>(window: Window, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        Self::new(window, "scroll", handler)
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove '{}' listener: {:?}", self.event, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoked_liveness_is_shared_by_clones() {
        let live = Liveness::new();
        let held_by_timer = live.clone();
        assert!(held_by_timer.is_alive());
        live.revoke();
        live.revoke();
        assert!(!held_by_timer.is_alive());
    }
}
