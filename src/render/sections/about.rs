use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::Profile;
use crate::render::document::{Document, MountId};
use crate::render::sections::{RenderContext, SectionOutcome, SkipReason, any_mount};

/// Split a biography into at most two paragraphs at the first `". "` at or after the midpoint.
///
/// The midpoint is taken over the text as given. Without such a terminator the text is
/// returned unchanged as one paragraph; after a split each paragraph is trimmed and the first
/// keeps its period. Blank input yields none.
pub fn split_summary(summary: &str) -> Vec<&str> {
    if summary.trim().is_empty() {
        return Vec::new();
    }

    let mut mid = summary.len() / 2;
    while !summary.is_char_boundary(mid) {
        mid += 1;
    }

    let Some(offset) = summary[mid..].find(". ") else {
        return vec![summary];
    };
    let cut = mid + offset;
    let first = summary[..=cut].trim_start();
    let rest = summary[cut + 2..].trim();
    if rest.is_empty() {
        vec![first]
    } else {
        vec![first, rest]
    }
}

/// Figures shown on the statistic cards.
///
/// Derived from the profile lists on every render; there are no independent counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    /// Number of experience entries.
    pub companies: usize,
    /// Total skill names across all categories.
    pub technologies: usize,
    /// Fixed display value when any experience is listed, else zero.
    pub years: u32,
}

impl Stats {
    /// Compute statistics for `profile`.
    pub fn from_profile(profile: &Profile, years_experience: u32) -> Self {
        Self {
            companies: profile.experience.len(),
            technologies: profile.skills.total(),
            years: if profile.experience.is_empty() {
                0
            } else {
                years_experience
            },
        }
    }

    /// `(label, target)` pairs in card order.
    pub fn cards(&self) -> [(&'static str, u64); 3] {
        [
            ("Companies", self.companies as u64),
            ("Technologies", self.technologies as u64),
            ("Years Experience", u64::from(self.years)),
        ]
    }
}

/// Fill the summary paragraphs and the statistic cards.
pub fn render_about(
    doc: &mut Document,
    profile: &Profile,
    ctx: &RenderContext,
) -> FolioResult<SectionOutcome> {
    if !any_mount(doc, &[MountId::AboutContent, MountId::AboutStats]) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }

    let paragraphs = split_summary(&profile.summary);
    let content: String = paragraphs
        .iter()
        .map(|p| format!(r#"<p class="about__text">{}</p>"#, escape(p)))
        .collect();

    let stats = Stats::from_profile(profile, ctx.years_experience);
    let cards: String = stats
        .cards()
        .iter()
        .map(|(label, target)| {
            format!(
                r#"<div class="stat-card"><span class="stat-card__number" data-count="{target}">0</span><span class="stat-card__plus">+</span><span class="stat-card__label">{label}</span></div>"#
            )
        })
        .collect();

    doc.replace(MountId::AboutContent, content);
    doc.replace(MountId::AboutStats, cards);

    Ok(SectionOutcome::Rendered {
        items: paragraphs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::{Experience, SkillGroup, SkillGroups};

    #[test]
    fn splits_at_terminator_after_midpoint() {
        let s = "One. Two is longer here. Three ends it. Four.";
        let parts = split_summary(s);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].ends_with('.'));
        assert_eq!(format!("{} {}", parts[0], parts[1]), s);
    }

    #[test]
    fn no_terminator_after_midpoint_is_single_paragraph() {
        let s = "First sentence here. then a long tail without any terminator at all";
        assert_eq!(split_summary(s), vec![s]);
    }

    #[test]
    fn midpoint_counts_surrounding_whitespace() {
        let padded = format!("Aaaa. Bbbb. Cccc{}", " ".repeat(20));
        assert_eq!(split_summary(&padded), vec![padded.as_str()]);

        let leading = "  no terminator here";
        assert_eq!(split_summary(leading), vec![leading]);

        let split = "  Alpha beta gamma. Delta epsilon. Zeta eta theta.  ";
        assert_eq!(
            split_summary(split),
            vec!["Alpha beta gamma. Delta epsilon.", "Zeta eta theta."]
        );
    }

    #[test]
    fn terminator_only_at_end_is_single_paragraph() {
        assert_eq!(split_summary("Short text."), vec!["Short text."]);
    }

    #[test]
    fn multibyte_midpoint_does_not_panic() {
        let s = "Ünïcödé – ünïcödé – ünïcödé. Ënd här.";
        let parts = split_summary(s);
        assert!(!parts.is_empty());
    }

    #[test]
    fn blank_summary_has_no_paragraphs() {
        assert!(split_summary("   ").is_empty());
    }

    #[test]
    fn stats_follow_lists() {
        let mut p = Profile::default();
        p.skills = SkillGroups(vec![
            SkillGroup {
                key: "a".into(),
                items: vec!["x".into(), "y".into()],
            },
            SkillGroup {
                key: "b".into(),
                items: vec!["z".into()],
            },
        ]);
        assert_eq!(Stats::from_profile(&p, 4).years, 0);

        p.experience = vec![Experience::default(), Experience::default()];
        let s = Stats::from_profile(&p, 4);
        assert_eq!(s.companies, 2);
        assert_eq!(s.technologies, 3);
        assert_eq!(s.years, 4);
    }

    #[test]
    fn renders_counter_targets() {
        let mut doc = Document::embedded().unwrap();
        let mut p = Profile::default();
        p.experience = vec![Experience::default(); 3];
        p.summary = "<b>bold</b> claim".into();
        render_about(&mut doc, &p, &RenderContext::default()).unwrap();
        let stats = doc.content(MountId::AboutStats).unwrap();
        assert!(stats.contains(r#"data-count="3""#));
        assert!(stats.contains(r#"data-count="4""#));
        let content = doc.content(MountId::AboutContent).unwrap();
        assert!(content.contains("&lt;b&gt;bold&lt;/b&gt; claim"));
    }
}
