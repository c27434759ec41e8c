use crate::foundation::error::FolioResult;
use crate::profile::model::Profile;
use crate::render::document::{Document, MountId};
use crate::render::sections::about::{Stats, render_about};
use crate::render::sections::contact::render_contact;
use crate::render::sections::footer::render_footer;
use crate::render::sections::hero::render_hero;
use crate::render::sections::projects::render_projects;
use crate::render::sections::resume::render_resume_cta;
use crate::render::sections::skills::render_skills;
use crate::render::sections::timeline::render_timeline;
use crate::render::sections::{RenderContext, Section, SectionOutcome};

/// Outcome of one section in a render pass.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SectionReport {
    pub section: Section,
    /// Outcome, or the error that degraded this section.
    pub result: Result<SectionOutcome, String>,
}

/// Per-section results of a render pass, in render order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderReport {
    pub sections: Vec<SectionReport>,
}

impl RenderReport {
    /// Outcome for `section`, if it rendered without error.
    pub fn outcome(&self, section: Section) -> Option<SectionOutcome> {
        self.sections
            .iter()
            .find(|r| r.section == section)
            .and_then(|r| r.result.as_ref().ok().copied())
    }

    /// Number of repeated fragments `section` wrote, zero if skipped or failed.
    pub fn items(&self, section: Section) -> usize {
        match self.outcome(section) {
            Some(SectionOutcome::Rendered { items }) => items,
            _ => 0,
        }
    }

    /// Sections that failed, with their error messages.
    pub fn failures(&self) -> impl Iterator<Item = (Section, &str)> {
        self.sections
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.section, e.as_str())))
    }

    /// `true` when every section rendered or was skipped.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Run every section renderer once, in document order.
///
/// A renderer that fails degrades only its own section; the pass always completes.
#[tracing::instrument(skip_all, fields(name = %profile.personal.name))]
pub fn render(profile: &Profile, doc: &mut Document, ctx: &RenderContext) -> RenderReport {
    let mut report = RenderReport::default();
    for section in Section::ORDER {
        let result = render_section(section, profile, doc, ctx);
        match &result {
            Ok(outcome) => tracing::debug!(section = section.name(), ?outcome, "section rendered"),
            Err(e) => tracing::warn!(section = section.name(), error = %e, "section degraded"),
        }
        report.sections.push(SectionReport {
            section,
            result: result.map_err(|e| e.to_string()),
        });
    }
    report
}

fn render_section(
    section: Section,
    profile: &Profile,
    doc: &mut Document,
    ctx: &RenderContext,
) -> FolioResult<SectionOutcome> {
    match section {
        Section::Identity => render_hero(doc, profile, ctx),
        Section::About => render_about(doc, profile, ctx),
        Section::Skills => render_skills(doc, &profile.skills),
        Section::Projects => render_projects(doc, &profile.projects),
        Section::Timeline => render_timeline(doc, &profile.experience, &profile.education),
        Section::ResumeCta => render_resume_cta(doc, profile.resume.as_ref()),
        Section::Contact => render_contact(doc, &profile.personal, ctx),
        Section::Footer => render_footer(doc, &profile.personal, ctx),
    }
}

/// An element the effects layer can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementRef {
    /// The `index`-th revealable item inside a section.
    Reveal {
        section: Section,
        index: usize,
    },
    /// The `index`-th statistic number.
    Counter {
        index: usize,
    },
    /// The timeline container.
    Timeline,
    /// The `index`-th section divider line.
    Divider {
        index: usize,
    },
}

/// A fully rendered page. Effects can only be attached to one of these, which keeps
/// observers from ever seeing elements the renderers have not produced yet.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    document: Document,
    report: RenderReport,
    stats: Option<Stats>,
}

impl RenderedPage {
    /// Render `profile` into `document`.
    pub fn build(profile: &Profile, mut document: Document, ctx: &RenderContext) -> Self {
        let report = render(profile, &mut document, ctx);
        let stats = (document.has(MountId::AboutStats) && report.outcome(Section::About).is_some())
            .then(|| Stats::from_profile(profile, ctx.years_experience));
        Self {
            document,
            report,
            stats,
        }
    }

    pub fn html(&self) -> String {
        self.document.to_html()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn report(&self) -> &RenderReport {
        &self.report
    }

    /// Statistics shown on the counters, when the stats mount was rendered.
    pub fn stats(&self) -> Option<Stats> {
        self.stats
    }

    /// Items tagged for reveal-on-scroll, in document order.
    pub fn reveal_targets(&self) -> Vec<ElementRef> {
        [Section::Skills, Section::Projects, Section::Timeline]
            .into_iter()
            .flat_map(|section| {
                (0..self.report.items(section)).map(move |index| ElementRef::Reveal { section, index })
            })
            .collect()
    }

    /// Counter elements with their target values.
    pub fn counter_targets(&self) -> Vec<(ElementRef, u64)> {
        self.stats
            .map(|s| {
                s.cards()
                    .iter()
                    .enumerate()
                    .map(|(index, (_, target))| (ElementRef::Counter { index }, *target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Section divider lines present in the layout.
    pub fn divider_targets(&self) -> Vec<ElementRef> {
        let count = self
            .document
            .to_html()
            .matches("section-divider__line")
            .count();
        (0..count).map(|index| ElementRef::Divider { index }).collect()
    }

    /// `true` when the layout includes the timeline container.
    pub fn has_timeline(&self) -> bool {
        self.document.has(MountId::Timeline)
    }
}
