//! Layout template and its registry of named mount points.
//!
//! A template is static HTML with `{{ mountName }}` placeholders. Parsing it once yields a
//! [`Document`]: the set of mounts present on this page variant plus the current content of
//! each. Section renderers replace a mount's content wholesale; [`Document::to_html`] splices
//! the contents back into the template.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::error::{FolioError, FolioResult};

/// Layout template compiled into the binary.
pub const EMBEDDED_TEMPLATE: &str = include_str!("../../assets/index.html");

/// A named location in the layout that a renderer may fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MountId {
    PageTitle,
    NavLogo,
    /// Navigation resume link `href`.
    NavResume,
    HeroName,
    HeroRole,
    HeroTagline,
    /// Hero resume link `href`.
    HeroResume,
    HeroCode,
    AboutContent,
    AboutStats,
    SkillsGrid,
    ProjectsGrid,
    /// Experience and education items.
    Timeline,
    ResumeCta,
    ContactInfo,
    FooterSocials,
    CurrentYear,
    FooterName,
}

impl MountId {
    /// Every mount, in template order of the embedded layout.
    pub const ALL: [MountId; 18] = [
        Self::PageTitle,
        Self::NavLogo,
        Self::NavResume,
        Self::HeroName,
        Self::HeroRole,
        Self::HeroTagline,
        Self::HeroResume,
        Self::HeroCode,
        Self::AboutContent,
        Self::AboutStats,
        Self::SkillsGrid,
        Self::ProjectsGrid,
        Self::Timeline,
        Self::ResumeCta,
        Self::ContactInfo,
        Self::FooterSocials,
        Self::CurrentYear,
        Self::FooterName,
    ];

    /// Placeholder name used in templates.
    pub fn key(self) -> &'static str {
        match self {
            Self::PageTitle => "pageTitle",
            Self::NavLogo => "navLogo",
            Self::NavResume => "navResume",
            Self::HeroName => "heroName",
            Self::HeroRole => "heroRole",
            Self::HeroTagline => "heroTagline",
            Self::HeroResume => "heroResume",
            Self::HeroCode => "heroCode",
            Self::AboutContent => "aboutContent",
            Self::AboutStats => "aboutStats",
            Self::SkillsGrid => "skillsGrid",
            Self::ProjectsGrid => "projectsGrid",
            Self::Timeline => "timeline",
            Self::ResumeCta => "resumeCta",
            Self::ContactInfo => "contactInfo",
            Self::FooterSocials => "footerSocials",
            Self::CurrentYear => "currentYear",
            Self::FooterName => "footerName",
        }
    }

    /// Look up a mount by placeholder name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9]*)\s*\}\}").unwrap())
}

fn element_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\bid="([^"]+)""#).unwrap())
}

/// Parsed layout plus current mount contents.
#[derive(Clone, Debug)]
pub struct Document {
    template: String,
    mounts: BTreeMap<MountId, String>,
    element_ids: BTreeSet<String>,
}

impl Document {
    /// Parse a template, registering every placeholder it contains.
    ///
    /// Unknown placeholder names are rejected so a typo cannot silently drop a section.
    pub fn parse(template: impl Into<String>) -> FolioResult<Self> {
        let template = template.into();
        let mut mounts = BTreeMap::new();
        for cap in placeholder_re().captures_iter(&template) {
            let key = &cap[1];
            let id = MountId::from_key(key)
                .ok_or_else(|| FolioError::validation(format!("unknown mount '{key}'")))?;
            mounts.insert(id, String::new());
        }
        let element_ids = element_id_re()
            .captures_iter(&template)
            .map(|c| c[1].to_string())
            .collect();
        Ok(Self {
            template,
            mounts,
            element_ids,
        })
    }

    /// The layout compiled into the binary.
    pub fn embedded() -> FolioResult<Self> {
        Self::parse(EMBEDDED_TEMPLATE)
    }

    /// Read and parse a template file.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            FolioError::load(format!("read template '{}': {e}", path.display()))
        })?;
        Self::parse(s)
    }

    /// `true` when this layout has a placeholder for `id`.
    pub fn has(&self, id: MountId) -> bool {
        self.mounts.contains_key(&id)
    }

    /// Replace the full content of a mount. Returns `false` (and does nothing) when the layout
    /// has no such mount.
    pub fn replace(&mut self, id: MountId, html: String) -> bool {
        match self.mounts.get_mut(&id) {
            Some(slot) => {
                *slot = html;
                true
            }
            None => false,
        }
    }

    pub fn content(&self, id: MountId) -> Option<&str> {
        self.mounts.get(&id).map(String::as_str)
    }

    /// Mounts present in this layout.
    pub fn mounts(&self) -> impl Iterator<Item = MountId> + '_ {
        self.mounts.keys().copied()
    }

    /// `true` when the static layout declares an element with this `id` attribute.
    pub fn has_element(&self, element_id: &str) -> bool {
        self.element_ids.contains(element_id)
    }

    /// Splice mount contents into the template.
    pub fn to_html(&self) -> String {
        placeholder_re()
            .replace_all(&self.template, |cap: &regex::Captures<'_>| {
                MountId::from_key(&cap[1])
                    .and_then(|id| self.mounts.get(&id))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_template_registers_every_mount() {
        let doc = Document::embedded().unwrap();
        for id in MountId::ALL {
            assert!(doc.has(id), "missing mount {}", id.key());
        }
    }

    #[test]
    fn keys_round_trip() {
        for id in MountId::ALL {
            assert_eq!(MountId::from_key(id.key()), Some(id));
        }
        assert_eq!(MountId::from_key("nope"), None);
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        assert!(Document::parse("<p>{{ heroNmae }}</p>").is_err());
    }

    #[test]
    fn replace_on_missing_mount_is_a_noop() {
        let mut doc = Document::parse("<h1>{{ heroName }}</h1>").unwrap();
        assert!(!doc.replace(MountId::Timeline, "x".into()));
        assert!(doc.replace(MountId::HeroName, "Ada".into()));
        assert_eq!(doc.to_html(), "<h1>Ada</h1>");
    }

    #[test]
    fn replace_overwrites_previous_content() {
        let mut doc = Document::parse("<div>{{timeline}}</div>").unwrap();
        doc.replace(MountId::Timeline, "one".into());
        doc.replace(MountId::Timeline, "two".into());
        assert_eq!(doc.to_html(), "<div>two</div>");
    }

    #[test]
    fn unfilled_mounts_render_empty() {
        let doc = Document::parse("<a href=\"{{ navResume }}\">r</a>").unwrap();
        assert_eq!(doc.to_html(), "<a href=\"\">r</a>");
    }

    #[test]
    fn element_ids_are_indexed() {
        let doc = Document::embedded().unwrap();
        assert!(doc.has_element("about"));
        assert!(doc.has_element("contact"));
        assert!(!doc.has_element("missing-section"));
    }
}
