use std::ops::{Add, Sub};

pub use kurbo::Rect;

/// Monotonic timestamp or duration in whole milliseconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    pub fn since(self, earlier: Millis) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }

    /// Value as `f64`, for progress computations.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Millis {
    type Output = Millis;

    fn sub(self, rhs: Millis) -> Millis {
        self.since(rhs)
    }
}

/// Source of the current time for rate limiting and timers.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Millis;
}

/// Wall clock measured from construction.
#[derive(Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        let ms = self.origin.elapsed().as_millis();
        Millis(u64::try_from(ms).unwrap_or(u64::MAX))
    }
}

/// Visible area of the page in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset of the top edge.
    pub scroll_y: f64,
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Viewport of the given size scrolled to `scroll_y`.
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_y,
            width,
            height,
        }
    }

    /// Visible rectangle in document coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.scroll_y + self.height)
    }

    /// Fraction of `element` (document coordinates) inside the viewport, after shrinking the
    /// viewport's bottom edge by `bottom_margin` pixels.
    ///
    /// Zero-area elements count as fully visible once their edge is inside the viewport.
    pub fn intersection_ratio(&self, element: Rect, bottom_margin: f64) -> f64 {
        let mut root = self.rect();
        root.y1 = (root.y1 - bottom_margin).max(root.y0);

        let area = element.area();
        if area <= 0.0 {
            let inside = element.y0 >= root.y0 && element.y0 <= root.y1;
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = element.intersect(root);
        (overlap.area() / area).clamp(0.0, 1.0)
    }
}
