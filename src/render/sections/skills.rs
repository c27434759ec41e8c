use std::borrow::Cow;

use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::SkillGroups;
use crate::render::document::{Document, MountId};
use crate::render::icons::Icon;
use crate::render::sections::{SectionOutcome, SkipReason, tag_list};

/// Display metadata for a skill category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillMeta<'a> {
    /// Heading text.
    pub title: Cow<'a, str>,
    /// Heading icon.
    pub icon: Icon,
}

const KNOWN_CATEGORIES: [(&str, &str, Icon); 7] = [
    ("programming_languages", "Languages", Icon::Code),
    ("frameworks_libraries", "Frameworks & Libs", Icon::Server),
    ("frontend", "Frontend", Icon::Layout),
    ("databases", "Databases", Icon::Database),
    ("devops_cloud", "DevOps & Cloud", Icon::Cloud),
    ("tools", "Tools & Platforms", Icon::Tool),
    ("operating_systems", "Operating Systems", Icon::Monitor),
];

/// Heading for a category key; unknown keys get their separators replaced by spaces and the
/// code icon.
pub fn skill_meta(key: &str) -> SkillMeta<'_> {
    KNOWN_CATEGORIES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, title, icon)| SkillMeta {
            title: Cow::Borrowed(title),
            icon,
        })
        .unwrap_or_else(|| SkillMeta {
            title: Cow::Owned(key.replace(['_', '-'], " ")),
            icon: Icon::Code,
        })
}

/// Render one group per category, in the profile's own key order.
pub fn render_skills(doc: &mut Document, skills: &SkillGroups) -> FolioResult<SectionOutcome> {
    if !doc.has(MountId::SkillsGrid) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }
    if skills.is_empty() {
        doc.replace(MountId::SkillsGrid, String::new());
        return Ok(SectionOutcome::Skipped(SkipReason::NoData));
    }

    let html: String = skills
        .iter()
        .map(|group| {
            let meta = skill_meta(&group.key);
            format!(
                r#"<div class="skill-group reveal"><h3 class="skill-group__title"><span class="skill-group__icon">{}</span>{}</h3><div class="skill-group__items">{}</div></div>"#,
                meta.icon.svg(),
                escape(&meta.title),
                tag_list("skill-chip", &group.items),
            )
        })
        .collect();

    doc.replace(MountId::SkillsGrid, html);
    Ok(SectionOutcome::Rendered {
        items: skills.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::SkillGroup;

    fn groups(keys: &[&str]) -> SkillGroups {
        SkillGroups(
            keys.iter()
                .map(|k| SkillGroup {
                    key: (*k).to_string(),
                    items: vec![format!("{k}-skill")],
                })
                .collect(),
        )
    }

    #[test]
    fn known_keys_use_table() {
        let m = skill_meta("devops_cloud");
        assert_eq!(m.title, "DevOps & Cloud");
        assert_eq!(m.icon, Icon::Cloud);
    }

    #[test]
    fn unknown_keys_fall_back() {
        let m = skill_meta("machine_learning-ops");
        assert_eq!(m.title, "machine learning ops");
        assert_eq!(m.icon, Icon::Code);
    }

    #[test]
    fn groups_render_in_input_order() {
        let mut doc = Document::embedded().unwrap();
        let out = render_skills(&mut doc, &groups(&["tools", "frontend", "zz_custom"])).unwrap();
        assert_eq!(out, SectionOutcome::Rendered { items: 3 });
        let html = doc.content(MountId::SkillsGrid).unwrap();
        let tools = html.find("Tools &amp; Platforms").unwrap();
        let frontend = html.find("Frontend").unwrap();
        let custom = html.find("zz custom").unwrap();
        assert!(tools < frontend && frontend < custom);
        assert_eq!(html.matches("skill-group reveal").count(), 3);
    }

    #[test]
    fn empty_skills_clear_the_mount() {
        let mut doc = Document::embedded().unwrap();
        render_skills(&mut doc, &groups(&["tools"])).unwrap();
        let out = render_skills(&mut doc, &SkillGroups::default()).unwrap();
        assert_eq!(out, SectionOutcome::Skipped(SkipReason::NoData));
        assert_eq!(doc.content(MountId::SkillsGrid), Some(""));
    }
}
