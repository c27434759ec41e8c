use kurbo::Point;

/// Fraction of the remaining distance the glow covers per frame.
pub const GLOW_FOLLOW: f64 = 0.08;
/// Viewports at or below this width get no glow.
pub const GLOW_MIN_VIEWPORT_WIDTH: f64 = 768.0;

const OFFSCREEN: Point = Point::new(-1000.0, -1000.0);

/// A soft highlight that trails the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorGlow {
    pointer: Point,
    glow: Point,
    active: bool,
}

impl CursorGlow {
    /// Glow for a viewport of `width`; `None` on narrow (touch-sized) viewports.
    pub fn for_viewport(width: f64) -> Option<Self> {
        (width > GLOW_MIN_VIEWPORT_WIDTH).then(|| Self {
            pointer: OFFSCREEN,
            glow: OFFSCREEN,
            active: false,
        })
    }

    /// Pointer moved; the first move activates the glow.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
        self.active = true;
    }

    /// Pointer left the document.
    pub fn on_pointer_leave(&mut self) {
        self.active = false;
    }

    /// Advance one animation frame and return the glow position.
    pub fn frame(&mut self) -> Point {
        self.glow = self.glow.lerp(self.pointer, GLOW_FOLLOW);
        self.glow
    }

    /// Current glow position.
    pub fn position(&self) -> Point {
        self.glow
    }

    /// `true` while the glow is shown.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_have_no_glow() {
        assert!(CursorGlow::for_viewport(768.0).is_none());
        assert!(CursorGlow::for_viewport(1024.0).is_some());
    }

    #[test]
    fn glow_converges_on_pointer() {
        let mut g = CursorGlow::for_viewport(1280.0).unwrap();
        assert!(!g.is_active());
        g.on_pointer_move(100.0, 200.0);
        assert!(g.is_active());
        let first = g.frame();
        assert!((first.x - (-1000.0 + 1100.0 * GLOW_FOLLOW)).abs() < 1e-9);
        for _ in 0..400 {
            g.frame();
        }
        assert!((g.position().x - 100.0).abs() < 1e-6);
        assert!((g.position().y - 200.0).abs() < 1e-6);
        g.on_pointer_leave();
        assert!(!g.is_active());
    }
}
