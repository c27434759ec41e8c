//! Event dispatch for a rendered page.
//!
//! The host feeds [`Event`]s in delivery order; the runtime owns every viewport effect and
//! interaction handler and answers each event with a [`Reaction`] the host applies.

use std::collections::BTreeMap;

use crate::effects::counter::CounterAnimation;
use crate::effects::cursor::CursorGlow;
use crate::effects::observer::{ObserverOptions, OneShotEffect};
use crate::effects::scroll::{PageLayout, ScrollAnimation, ScrollEffects, ScrollState};
use crate::effects::throttle::Throttle;
use crate::foundation::core::{Millis, Rect, Viewport};
use crate::interact::anchor::smooth_scroll_target;
use crate::interact::contact::{ContactForm, FormInput, SubmitOutcome};
use crate::interact::nav::{MobileNav, TabAction};
use crate::render::coordinator::{ElementRef, RenderedPage};

/// Minimum spacing between handled scroll notifications.
pub const SCROLL_THROTTLE: Millis = Millis(40);

/// Host state at attach time.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeOptions {
    pub viewport: Viewport,
    /// Measured section boxes and header height.
    pub layout: PageLayout,
    pub now: Millis,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(0.0, 1280.0, 800.0),
            layout: PageLayout::default(),
            now: Millis::ZERO,
        }
    }
}

/// Clickable controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Click {
    NavToggle,
    /// Dimmed overlay behind the open navigation.
    Overlay,
    /// A link inside the navigation list.
    NavLink(String),
    /// Any other in-page link.
    Anchor(String),
    BackToTop,
    ResumeDownload,
}

/// Keys the runtime reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

/// A host event.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window scrolled to `scroll_y`.
    Scroll { now: Millis, scroll_y: f64 },
    /// Visibility ratio of an observed element changed.
    Visibility { now: Millis, target: ElementRef, ratio: f64 },
    Frame { now: Millis },
    /// Pointer moved to `(x, y)` in client coordinates.
    PointerMove { x: f64, y: f64 },
    /// Pointer left the document.
    PointerLeave,
    Click { now: Millis, target: Click },
    /// Key pressed. `focused` is the index of the focused navigation element, if any.
    Key { key: Key, shift: bool, focused: Option<usize> },
    Input(FormInput),
    Submit { now: Millis },
}

/// What the host should do in response to an event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reaction {
    /// Suppress the event's default action.
    pub prevent_default: bool,
    /// Move focus to this navigation element.
    pub focus: Option<usize>,
    /// A smooth scroll toward this offset has started.
    pub scroll_to: Option<f64>,
    /// Elements whose one-shot effect fired.
    pub fired: Vec<ElementRef>,
}

/// Effects and handlers attached to a [`RenderedPage`].
#[derive(Clone, Debug)]
pub struct Runtime {
    viewport: Viewport,
    layout: PageLayout,
    now: Millis,
    loader_hidden: bool,
    scroll_gate: Throttle,
    scroll: ScrollEffects,
    scroll_animation: Option<ScrollAnimation>,
    reveals: OneShotEffect,
    counters: OneShotEffect,
    counter_targets: BTreeMap<ElementRef, u64>,
    running_counters: BTreeMap<ElementRef, CounterAnimation>,
    timeline: OneShotEffect,
    dividers: OneShotEffect,
    glow: Option<CursorGlow>,
    nav: MobileNav,
    form: ContactForm,
    resume_downloads: u32,
}

impl Runtime {
    /// Attach every effect and handler to `page`.
    #[tracing::instrument(skip_all)]
    pub fn attach(page: &RenderedPage, options: RuntimeOptions) -> Self {
        let RuntimeOptions {
            viewport,
            layout,
            now,
        } = options;
        let counter_targets: BTreeMap<_, _> = page.counter_targets().into_iter().collect();
        let timeline = page.has_timeline().then_some(ElementRef::Timeline);

        let mut scroll = ScrollEffects::default();
        scroll.prime(viewport.scroll_y, &layout);

        let runtime = Self {
            viewport,
            now,
            loader_hidden: true,
            scroll_gate: Throttle::new(SCROLL_THROTTLE),
            scroll,
            scroll_animation: None,
            reveals: OneShotEffect::new(ObserverOptions::REVEAL, page.reveal_targets()),
            counters: OneShotEffect::new(ObserverOptions::COUNTER, counter_targets.keys().copied()),
            counter_targets,
            running_counters: BTreeMap::new(),
            timeline: OneShotEffect::new(ObserverOptions::TIMELINE, timeline),
            dividers: OneShotEffect::new(ObserverOptions::DIVIDER, page.divider_targets()),
            glow: CursorGlow::for_viewport(viewport.width),
            nav: MobileNav::new(nav_focusables(&page.html())),
            form: ContactForm::new(),
            resume_downloads: 0,
            layout,
        };
        tracing::debug!(
            reveals = runtime.reveals.pending(),
            counters = runtime.counters.pending(),
            dividers = runtime.dividers.pending(),
            glow = runtime.glow.is_some(),
            "runtime attached"
        );
        runtime
    }

    pub fn dispatch(&mut self, event: Event) -> Reaction {
        let mut reaction = Reaction::default();
        match event {
            Event::Scroll { now, scroll_y } => {
                self.advance(now);
                self.scrolled(scroll_y);
            }
            Event::Visibility { now, target, ratio } => {
                self.advance(now);
                if self.notify(target, ratio) {
                    reaction.fired.push(target);
                }
            }
            Event::Frame { now } => {
                self.advance(now);
                self.frame(now);
            }
            Event::PointerMove { x, y } => {
                if let Some(glow) = &mut self.glow {
                    glow.on_pointer_move(x, y);
                }
            }
            Event::PointerLeave => {
                if let Some(glow) = &mut self.glow {
                    glow.on_pointer_leave();
                }
            }
            Event::Click { now, target } => {
                self.advance(now);
                self.click(target, &mut reaction);
            }
            Event::Key {
                key,
                shift,
                focused,
            } => match key {
                Key::Escape => {
                    self.nav.on_escape();
                }
                Key::Tab => {
                    if let TabAction::FocusTo(i) = self.nav.on_tab(shift, focused) {
                        reaction.prevent_default = true;
                        reaction.focus = Some(i);
                    }
                }
                Key::Other => {}
            },
            Event::Input(input) => self.form.set_fields(input),
            Event::Submit { now } => {
                self.advance(now);
                reaction.prevent_default = true;
                if let SubmitOutcome::Rejected(e) = self.form.submit(now) {
                    tracing::debug!(%e, "contact form rejected");
                }
            }
        }
        reaction
    }

    /// Compute visibility ratios from element boxes (document coordinates) against the
    /// current viewport and deliver them. Returns the elements that fired.
    pub fn observe_boxes(&mut self, now: Millis, boxes: &[(ElementRef, Rect)]) -> Vec<ElementRef> {
        self.advance(now);
        boxes
            .iter()
            .filter(|(target, rect)| {
                let ratio = self
                    .viewport
                    .intersection_ratio(*rect, options_for(*target).bottom_margin);
                self.notify(*target, ratio)
            })
            .map(|(target, _)| *target)
            .collect()
    }

    /// `true` once the page loader has been dismissed.
    pub fn loader_hidden(&self) -> bool {
        self.loader_hidden
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Header, back-to-top and active-link state.
    pub fn scroll_state(&self) -> &ScrollState {
        self.scroll.state()
    }

    /// `true` while a smooth scroll is in progress.
    pub fn is_scrolling_smoothly(&self) -> bool {
        self.scroll_animation.is_some()
    }

    /// `true` once `target` has been revealed.
    pub fn is_revealed(&self, target: ElementRef) -> bool {
        self.reveals.has_fired(target)
    }

    pub fn revealed_count(&self) -> usize {
        self.reveals.fired().count()
    }

    /// Displayed counter values, in card order. Counters that have not started show 0.
    pub fn counter_values(&self) -> Vec<(ElementRef, u64)> {
        self.counter_targets
            .keys()
            .map(|target| {
                let value = self
                    .running_counters
                    .get(target)
                    .map_or(0, |anim| anim.sample(self.now));
                (*target, value)
            })
            .collect()
    }

    /// `true` once the timeline line has been animated in.
    pub fn timeline_animated(&self) -> bool {
        self.timeline.has_fired(ElementRef::Timeline)
    }

    /// `true` once divider `index` has been drawn.
    pub fn divider_drawn(&self, index: usize) -> bool {
        self.dividers.has_fired(ElementRef::Divider { index })
    }

    /// Cursor glow, absent on narrow viewports.
    pub fn glow(&self) -> Option<&CursorGlow> {
        self.glow.as_ref()
    }

    pub fn nav(&self) -> &MobileNav {
        &self.nav
    }

    /// `true` while body scrolling is locked behind the open navigation.
    pub fn body_scroll_locked(&self) -> bool {
        self.nav.is_open()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Resume download clicks seen so far.
    pub fn resume_downloads(&self) -> u32 {
        self.resume_downloads
    }

    fn advance(&mut self, now: Millis) {
        self.now = self.now.max(now);
        self.form.tick(self.now);
    }

    fn scrolled(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
        if self.scroll_gate.admit(self.now) {
            self.scroll.on_scroll(scroll_y, &self.layout);
        }
    }

    fn frame(&mut self, now: Millis) {
        if let Some(anim) = self.scroll_animation {
            self.scrolled(anim.sample(now));
            if anim.is_finished(now) {
                self.scroll_animation = None;
            }
        }
        if let Some(glow) = &mut self.glow {
            glow.frame();
        }
    }

    fn click(&mut self, target: Click, reaction: &mut Reaction) {
        let scroll_to = match target {
            Click::NavToggle => {
                self.nav.toggle();
                None
            }
            Click::Overlay => {
                self.nav.on_overlay_click();
                None
            }
            Click::NavLink(href) => {
                if self.nav.is_open() {
                    self.nav.on_link_click();
                }
                smooth_scroll_target(&href, &self.layout)
            }
            Click::Anchor(href) => smooth_scroll_target(&href, &self.layout),
            Click::BackToTop => Some(0.0),
            Click::ResumeDownload => {
                self.resume_downloads += 1;
                tracing::info!("resume download initiated");
                None
            }
        };
        if let Some(to) = scroll_to {
            reaction.prevent_default = true;
            reaction.scroll_to = Some(to);
            self.scroll_animation = Some(ScrollAnimation::new(self.viewport.scroll_y, to, self.now));
        }
    }

    fn notify(&mut self, target: ElementRef, ratio: f64) -> bool {
        match target {
            ElementRef::Reveal { .. } => self.reveals.notify(target, ratio),
            ElementRef::Timeline => self.timeline.notify(target, ratio),
            ElementRef::Divider { .. } => self.dividers.notify(target, ratio),
            ElementRef::Counter { .. } => {
                let fired = self.counters.notify(target, ratio);
                if fired && let Some(&goal) = self.counter_targets.get(&target) {
                    self.running_counters
                        .insert(target, CounterAnimation::new(goal, self.now));
                }
                fired
            }
        }
    }
}

fn options_for(target: ElementRef) -> ObserverOptions {
    match target {
        ElementRef::Reveal { .. } => ObserverOptions::REVEAL,
        ElementRef::Counter { .. } => ObserverOptions::COUNTER,
        ElementRef::Timeline => ObserverOptions::TIMELINE,
        ElementRef::Divider { .. } => ObserverOptions::DIVIDER,
    }
}

/// Links and buttons inside the navigation list, which bound the focus trap.
fn nav_focusables(html: &str) -> usize {
    let Some(start) = html.find(r#"id="navList""#) else {
        return 0;
    };
    let list = &html[start..];
    let list = list.find("</ul>").map_or(list, |end| &list[..end]);
    list.matches("<a ").count() + list.matches("<button").count()
}
