//! Visibility subscriptions.
//!
//! An [`Observer`] holds a set of observed elements and a trigger predicate (visible ratio at
//! or above a threshold). One-shot observers stop observing an element the first time it
//! fires; continuous ones keep observing.

use std::collections::BTreeSet;

use crate::render::coordinator::ElementRef;

/// Whether a subscription survives its first trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Detach from the element after it fires once.
    OneShot,
    /// Fire every time the predicate holds.
    Continuous,
}

/// Trigger predicate parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the element, in `(0, 1]`.
    pub threshold: f64,
    /// Pixels trimmed from the bottom of the viewport before measuring.
    pub bottom_margin: f64,
    pub mode: Mode,
}

impl ObserverOptions {
    /// Reveal-on-scroll: 10% visible with a 50px bottom deadzone.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        bottom_margin: 50.0,
        mode: Mode::OneShot,
    };

    /// Statistic counters: half visible.
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        bottom_margin: 0.0,
        mode: Mode::OneShot,
    };

    /// Timeline line: barely visible.
    pub const TIMELINE: Self = Self {
        threshold: 0.05,
        bottom_margin: 0.0,
        mode: Mode::OneShot,
    };

    /// Section divider lines.
    pub const DIVIDER: Self = Self {
        threshold: 0.3,
        bottom_margin: 0.0,
        mode: Mode::OneShot,
    };

    /// `true` when `ratio` satisfies the trigger predicate.
    pub fn is_triggered(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// A visibility subscription over a set of elements.
#[derive(Clone, Debug)]
pub struct Observer {
    options: ObserverOptions,
    observed: BTreeSet<ElementRef>,
}

impl Observer {
    /// Observer with no elements.
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: BTreeSet::new(),
        }
    }

    /// Observer watching `targets`.
    pub fn with_targets(options: ObserverOptions, targets: impl IntoIterator<Item = ElementRef>) -> Self {
        Self {
            options,
            observed: targets.into_iter().collect(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn observe(&mut self, target: ElementRef) {
        self.observed.insert(target);
    }

    pub fn unobserve(&mut self, target: ElementRef) {
        self.observed.remove(&target);
    }

    /// `true` while `target` is watched.
    pub fn is_observing(&self, target: ElementRef) -> bool {
        self.observed.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Deliver a visibility change. Returns `true` when the subscription fires for `target`.
    pub fn notify(&mut self, target: ElementRef, ratio: f64) -> bool {
        if !self.observed.contains(&target) || !self.options.is_triggered(ratio) {
            return false;
        }
        if self.options.mode == Mode::OneShot {
            self.observed.remove(&target);
        }
        true
    }
}

/// One-shot observer that also remembers which elements have fired.
#[derive(Clone, Debug)]
pub struct OneShotEffect {
    observer: Observer,
    fired: BTreeSet<ElementRef>,
}

impl OneShotEffect {
    /// Effect over `targets`. `options.mode` is forced to [`Mode::OneShot`].
    pub fn new(options: ObserverOptions, targets: impl IntoIterator<Item = ElementRef>) -> Self {
        let options = ObserverOptions {
            mode: Mode::OneShot,
            ..options
        };
        Self {
            observer: Observer::with_targets(options, targets),
            fired: BTreeSet::new(),
        }
    }

    /// Deliver a visibility change; returns `true` only on the element's first trigger.
    pub fn notify(&mut self, target: ElementRef, ratio: f64) -> bool {
        let fired = self.observer.notify(target, ratio);
        if fired {
            self.fired.insert(target);
        }
        fired
    }

    /// `true` once `target` has fired.
    pub fn has_fired(&self, target: ElementRef) -> bool {
        self.fired.contains(&target)
    }

    pub fn fired(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.fired.iter().copied()
    }

    /// Elements still waiting to fire.
    pub fn pending(&self) -> usize {
        self.observer.len()
    }
}
