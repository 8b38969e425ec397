use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::lifecycle::{Liveness, TickScheduler};
use crate::typing::{TypingConfig, TypingSequencer};

type DisplayFn = Rc<dyn Fn(&str)>;

struct Inner<S> {
    sequencer: TypingSequencer,
    scheduler: S,
    on_display: DisplayFn,
}

/// Runs a [`TypingSequencer`] off a [`TickScheduler`], pushing every new
/// display string to `on_display`.
pub struct TypingDriver<S: TickScheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
    live: Liveness,
}

impl<S: TickScheduler + 'static> TypingDriver<S> {
    pub fn new<F>(config: TypingConfig, scheduler: S, on_display: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                sequencer: TypingSequencer::new(config),
                scheduler,
                on_display: Rc::new(on_display),
            })),
            live: Liveness::new(),
        }
    }

    /// Schedules the first tick. A no-op for an empty phrase list or a
    /// stopped driver.
    pub fn start(&self) {
        if !self.live.is_alive() {
            return;
        }
        let (delay, display, on_display) = {
            let inner = self.inner.borrow();
            match inner.sequencer.start() {
                Some(delay) => (delay, inner.sequencer.display(), inner.on_display.clone()),
                None => return,
            }
        };
        on_display(&display);
        schedule(&self.inner, &self.live, delay);
    }

    pub fn stop(&self) {
        self.live.revoke();
        let mut inner = self.inner.borrow_mut();
        inner.scheduler.cancel();
        inner.sequencer.stop();
    }

    pub fn is_running(&self) -> bool {
        self.live.is_alive() && self.inner.borrow().sequencer.is_live()
    }

    pub fn display(&self) -> String {
        self.inner.borrow().sequencer.display()
    }
}

impl<S: TickScheduler + 'static> Drop for TypingDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: TickScheduler + 'static>(
    inner: &Rc<RefCell<Inner<S>>>,
    live: &Liveness,
    delay_ms: u32,
) {
    let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
    let live_for_tick = live.clone();
    inner.borrow_mut().scheduler.schedule(
        delay_ms,
        Box::new(move || fire(weak, live_for_tick)),
    );
}

fn fire<S: TickScheduler + 'static>(weak: Weak<RefCell<Inner<S>>>, live: Liveness) {
    if !live.is_alive() {
        return;
    }
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let (step, on_display) = {
        let mut guard = inner.borrow_mut();
        let step = guard.sequencer.tick();
        (step, guard.on_display.clone())
    };
    let Some(step) = step else {
        return;
    };

    on_display(&step.display);
    // the display callback may have stopped us
    if live.is_alive() {
        schedule(&inner, &live, step.next_delay_ms);
    }
}
