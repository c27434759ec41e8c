use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::{Project, require};
use crate::render::document::{Document, MountId};
use crate::render::icons::Icon;
use crate::render::sections::{SectionOutcome, SkipReason, non_blank, tag_list};

/// Render one card per project, in input order. Title and description are required.
pub fn render_projects(doc: &mut Document, projects: &[Project]) -> FolioResult<SectionOutcome> {
    if !doc.has(MountId::ProjectsGrid) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }
    if projects.is_empty() {
        doc.replace(MountId::ProjectsGrid, String::new());
        return Ok(SectionOutcome::Skipped(SkipReason::NoData));
    }

    let cards = projects
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(i, p))
        .collect::<FolioResult<Vec<_>>>()?;

    doc.replace(MountId::ProjectsGrid, cards.concat());
    Ok(SectionOutcome::Rendered {
        items: projects.len(),
    })
}

fn project_card(index: usize, p: &Project) -> FolioResult<String> {
    require(&p.title, &format!("projects[{index}].title"))?;
    require(&p.description, &format!("projects[{index}].description"))?;

    let org = non_blank(&p.organization)
        .map(|o| format!(r#"<p class="project-card__org">{}</p>"#, escape(o)))
        .unwrap_or_default();
    let highlights = if p.key_contributions.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="project-card__highlights">{}</div>"#,
            tag_list("project-card__highlight", &p.key_contributions)
        )
    };

    Ok(format!(
        r#"<article class="project-card reveal"><div class="project-card__icon">{icon}</div><h3 class="project-card__title">{title}</h3>{org}<p class="project-card__desc">{desc}</p>{highlights}<div class="project-card__tags">{tags}</div></article>"#,
        icon = Icon::Folder.svg(),
        title = escape(&p.title),
        desc = escape(&p.description),
        tags = tag_list("project-card__tag", &p.tech_stack),
    ))
}
