use crate::effects::ease::Ease;
use crate::foundation::core::Millis;

/// Duration of a counter animation.
pub const COUNTER_DURATION: Millis = Millis(1800);

/// Animates a number from 0 to `target` along an ease-out cubic curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    start: Millis,
    duration: Millis,
    ease: Ease,
}

impl CounterAnimation {
    /// Counter that starts at `start` and runs for [`COUNTER_DURATION`].
    pub fn new(target: u64, start: Millis) -> Self {
        Self {
            target,
            start,
            duration: COUNTER_DURATION,
            ease: Ease::OutCubic,
        }
    }

    /// Final value.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Displayed value at progress `t` in `[0, 1]`: `round(target * (1 - (1 - t)^3))`.
    pub fn value_at(&self, t: f64) -> u64 {
        (self.target as f64 * self.ease.apply(t)).round() as u64
    }

    /// Normalized progress at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration == Millis::ZERO {
            return 1.0;
        }
        (now.since(self.start).as_f64() / self.duration.as_f64()).min(1.0)
    }

    /// Value to display on the frame at `now`.
    pub fn sample(&self, now: Millis) -> u64 {
        self.value_at(self.progress(now))
    }

    /// `true` once the final value has been reached.
    pub fn is_finished(&self, now: Millis) -> bool {
        self.progress(now) >= 1.0
    }
}
