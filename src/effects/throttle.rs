//! Rate limiting for high-frequency notifications.
//!
//! The first call always runs. After that a call runs only when strictly more than the
//! interval has passed since the last call that ran; everything in between is dropped,
//! never queued.

use crate::foundation::core::{Clock, Millis};

/// Admission gate that remembers when it last let a call through.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Millis,
    last: Option<Millis>,
}

impl Throttle {
    /// Gate admitting at most one call per `interval`.
    pub fn new(interval: Millis) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Configured interval.
    pub fn interval(&self) -> Millis {
        self.interval
    }

    /// Decide whether a call at `now` runs, recording it if so.
    pub fn admit(&mut self, now: Millis) -> bool {
        let run = match self.last {
            None => true,
            Some(last) => now.since(last) > self.interval,
        };
        if run {
            self.last = Some(now);
        }
        run
    }
}

/// A callback wrapped in a [`Throttle`].
pub struct Throttled<F> {
    gate: Throttle,
    action: F,
}

impl<F: FnMut()> Throttled<F> {
    /// Invoke at an explicit time. Returns `true` when `action` ran.
    pub fn call_at(&mut self, now: Millis) -> bool {
        if !self.gate.admit(now) {
            return false;
        }
        (self.action)();
        true
    }

    /// Invoke at the clock's current time. Returns `true` when `action` ran.
    pub fn call(&mut self, clock: &impl Clock) -> bool {
        self.call_at(clock.now())
    }
}

impl<F> std::fmt::Debug for Throttled<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttled").field("gate", &self.gate).finish()
    }
}

/// Wrap `action` so it runs at most once per `interval`.
pub fn throttle<F: FnMut()>(action: F, interval: Millis) -> Throttled<F> {
    Throttled {
        gate: Throttle::new(interval),
        action,
    }
}
