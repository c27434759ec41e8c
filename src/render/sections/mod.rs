//! One renderer per page section.
//!
//! Every renderer follows the same shape: bail out when none of its mounts exist, map its
//! slice of the profile to per-item fragments, then write each mount in a single replace.
//! Fragments are fully built before anything is written, so a renderer that fails on a
//! missing required field leaves the document exactly as it found it.

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod projects;
pub(crate) mod resume;
pub(crate) mod skills;
pub(crate) mod timeline;

use crate::foundation::sanitize::escape;
use crate::render::document::{Document, MountId};

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Name, role, tagline, code card and resume links.
    Identity,
    /// Summary paragraphs and statistics.
    About,
    Skills,
    Projects,
    /// Experience followed by education.
    Timeline,
    /// Resume download call-to-action.
    ResumeCta,
    Contact,
    /// Footer links and year.
    Footer,
}

impl Section {
    /// All sections in render order.
    pub const ORDER: [Section; 8] = [
        Self::Identity,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Timeline,
        Self::ResumeCta,
        Self::Contact,
        Self::Footer,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Timeline => "timeline",
            Self::ResumeCta => "resume_cta",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }
}

/// Why a renderer produced nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The layout has none of the section's mounts.
    NoMount,
    /// The profile has no data for the section.
    NoData,
}

/// Result of running one renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionOutcome {
    /// Content written; `items` counts the repeated fragments (cards, groups, entries).
    Rendered {
        items: usize,
    },
    Skipped(SkipReason),
}

/// Values the renderers need that do not come from the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    pub year: i32,
    /// Country prefix placed before the phone number.
    pub phone_prefix: String,
    /// Link target for the external profile card.
    pub profile_url: String,
    /// Fixed "years of experience" statistic shown when any experience is listed.
    pub years_experience: u32,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            year: 2026,
            phone_prefix: "+91".to_string(),
            profile_url: "https://linkedin.com/in/".to_string(),
            years_experience: 4,
        }
    }
}

/// `true` when the layout has at least one of `ids`.
pub(crate) fn any_mount(doc: &Document, ids: &[MountId]) -> bool {
    ids.iter().any(|id| doc.has(*id))
}

/// Escaped `<span class="{class}">item</span>` for each item, concatenated.
pub(crate) fn tag_list<S: AsRef<str>>(class: &str, items: &[S]) -> String {
    items
        .iter()
        .map(|t| format!(r#"<span class="{class}">{}</span>"#, escape(t.as_ref())))
        .collect()
}

/// Escaped `<p class="{class}">item</p>` for each item, concatenated.
pub(crate) fn paragraph_list<S: AsRef<str>>(class: &str, items: &[S]) -> String {
    items
        .iter()
        .map(|t| format!(r#"<p class="{class}">{}</p>"#, escape(t.as_ref())))
        .collect()
}

/// Trimmed value when present and non-blank.
pub(crate) fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
