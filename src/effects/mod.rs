//! Viewport effects: reactions to scroll position and element visibility.

pub(crate) mod counter;
pub(crate) mod cursor;
pub(crate) mod ease;
pub(crate) mod observer;
pub(crate) mod scroll;
pub(crate) mod throttle;
