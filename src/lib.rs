#![forbid(unsafe_code)]

pub mod config;
pub mod runtime;
pub mod session;

mod effects;
mod foundation;
mod interact;
mod profile;
mod render;

pub use config::SiteConfig;
pub use effects::counter::{COUNTER_DURATION, CounterAnimation};
pub use effects::cursor::{CursorGlow, GLOW_FOLLOW, GLOW_MIN_VIEWPORT_WIDTH};
pub use effects::ease::Ease;
pub use effects::observer::{Mode, Observer, ObserverOptions, OneShotEffect};
pub use effects::scroll::{
    PageLayout, ScrollAnimation, ScrollEffects, ScrollState, SectionBox, SMOOTH_SCROLL_DURATION,
};
pub use effects::throttle::{Throttle, Throttled, throttle};
pub use foundation::core::{Clock, Millis, Rect, SystemClock, Viewport};
pub use foundation::error::{FolioError, FolioResult};
pub use foundation::sanitize::escape;
pub use interact::anchor::smooth_scroll_target;
pub use interact::contact::{
    ContactForm, Feedback, FeedbackKind, FormError, FormInput, SubmitOutcome, Submission,
};
pub use interact::nav::{MobileNav, TabAction};
pub use profile::fallback::{EMBEDDED_PROFILE_JSON, embedded_profile};
pub use profile::model::{
    Education, Experience, Personal, Profile, Project, Resume, SkillGroup, SkillGroups,
    SubProject,
};
pub use profile::source::{LoadedProfile, ProfileOrigin, ProfileSource, load_or_fallback};
pub use render::coordinator::{ElementRef, RenderReport, RenderedPage, SectionReport, render};
pub use render::document::{Document, EMBEDDED_TEMPLATE, MountId};
pub use render::icons::Icon;
pub use render::sections::about::{Stats, render_about, split_summary};
pub use render::sections::contact::render_contact;
pub use render::sections::footer::render_footer;
pub use render::sections::hero::render_hero;
pub use render::sections::projects::render_projects;
pub use render::sections::resume::render_resume_cta;
pub use render::sections::skills::{SkillMeta, render_skills, skill_meta};
pub use render::sections::timeline::render_timeline;
pub use render::sections::{RenderContext, Section, SectionOutcome, SkipReason};
pub use runtime::{Click, Event, Key, Reaction, Runtime, RuntimeOptions};
pub use session::Session;
