use crate::effects::ease::Ease;
use crate::foundation::core::Millis;

/// Scroll offset beyond which the header switches to its compact state.
pub const HEADER_SCROLLED_AT: f64 = 40.0;
/// Scroll offset beyond which the back-to-top button shows.
pub const BACK_TO_TOP_AT: f64 = 500.0;
/// Added to the scroll offset when matching the active section.
pub const ACTIVE_LINE_OFFSET: f64 = 140.0;
/// Subtracted from each section's top when matching the active section.
pub const SECTION_TOP_ALLOWANCE: f64 = 120.0;
/// Header height assumed when none has been measured.
pub const DEFAULT_HEADER_HEIGHT: f64 = 72.0;
/// Duration of a programmatic smooth scroll.
pub const SMOOTH_SCROLL_DURATION: Millis = Millis(600);

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionBox {
    /// Element `id`, the target of `#id` links.
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Measured geometry of the rendered page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    /// Live header height, if measured.
    #[serde(default)]
    pub header_height: Option<f64>,
    /// Sections in document order.
    #[serde(default)]
    pub sections: Vec<SectionBox>,
}

impl PageLayout {
    /// Section box by element id.
    pub fn section(&self, id: &str) -> Option<&SectionBox> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Header height, or the default when unmeasured.
    pub fn header_height(&self) -> f64 {
        self.header_height.unwrap_or(DEFAULT_HEADER_HEIGHT)
    }
}

/// Scroll-dependent page state.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScrollState {
    /// Header is in its compact state.
    pub header_scrolled: bool,
    /// Back-to-top button is visible.
    pub back_to_top_visible: bool,
    /// Section whose navigation link is highlighted.
    pub active_section: Option<String>,
}

/// Recomputes [`ScrollState`] from the scroll offset on every (throttled) tick.
#[derive(Clone, Debug, Default)]
pub struct ScrollEffects {
    state: ScrollState,
}

impl ScrollEffects {
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Update header and active-link state without touching back-to-top; used once on attach.
    pub fn prime(&mut self, scroll_y: f64, layout: &PageLayout) {
        self.state.header_scrolled = scroll_y > HEADER_SCROLLED_AT;
        self.update_active(scroll_y, layout);
    }

    /// Full update for a scroll tick.
    pub fn on_scroll(&mut self, scroll_y: f64, layout: &PageLayout) -> &ScrollState {
        self.state.header_scrolled = scroll_y > HEADER_SCROLLED_AT;
        self.update_active(scroll_y, layout);
        self.state.back_to_top_visible = scroll_y > BACK_TO_TOP_AT;
        &self.state
    }

    /// The last section whose adjusted box contains the reading line wins; when none does, the
    /// previous highlight stays.
    fn update_active(&mut self, scroll_y: f64, layout: &PageLayout) {
        let line = scroll_y + ACTIVE_LINE_OFFSET;
        let hit = layout
            .sections
            .iter()
            .rev()
            .find(|s| {
                let top = s.top - SECTION_TOP_ALLOWANCE;
                line >= top && line < top + s.height
            });
        if let Some(s) = hit {
            self.state.active_section = Some(s.id.clone());
        }
    }
}

/// A smooth scroll in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    start: Millis,
}

impl ScrollAnimation {
    /// Scroll from `from` to `to`, starting at `start`.
    pub fn new(from: f64, to: f64, start: Millis) -> Self {
        Self {
            from,
            to: to.max(0.0),
            start,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Offset for the frame at `now`.
    pub fn sample(&self, now: Millis) -> f64 {
        let t = now.since(self.start).as_f64() / SMOOTH_SCROLL_DURATION.as_f64();
        self.from + (self.to - self.from) * Ease::InOutCubic.apply(t)
    }

    /// `true` once the destination is reached.
    pub fn is_finished(&self, now: Millis) -> bool {
        now.since(self.start) >= SMOOTH_SCROLL_DURATION
    }
}
