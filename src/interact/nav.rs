//! Mobile navigation drawer with overlay and focus trap.

/// Where focus should go after a Tab key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabAction {
    /// Let the default focus movement happen.
    Default,
    /// Suppress the default and focus the element at this index.
    FocusTo(usize),
}

/// Open/closed state of the mobile navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
    focusables: usize,
}

impl MobileNav {
    /// Closed navigation containing `focusables` focusable links and buttons.
    pub fn new(focusables: usize) -> Self {
        Self {
            open: false,
            focusables,
        }
    }

    /// `true` while the drawer is open; overlay is visible and body scroll is locked.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the drawer.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the drawer.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle button pressed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Overlay clicked.
    pub fn on_overlay_click(&mut self) {
        self.close();
    }

    /// A navigation link was followed.
    pub fn on_link_click(&mut self) {
        self.close();
    }

    /// Escape pressed. Returns `true` when it closed the drawer.
    pub fn on_escape(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }

    /// Tab pressed while the element at `focused` (an index among the navigation's
    /// focusables, `None` when focus is elsewhere) has focus.
    ///
    /// While open, focus wraps from the last element to the first and, with Shift, from the
    /// first to the last.
    pub fn on_tab(&self, shift: bool, focused: Option<usize>) -> TabAction {
        if !self.open || self.focusables == 0 {
            return TabAction::Default;
        }
        let last = self.focusables - 1;
        match (shift, focused) {
            (true, Some(0)) => TabAction::FocusTo(last),
            (false, Some(i)) if i == last => TabAction::FocusTo(0),
            _ => TabAction::Default,
        }
    }
}
