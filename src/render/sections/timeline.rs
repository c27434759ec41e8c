use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::{Education, Experience, SubProject, require};
use crate::render::document::{Document, MountId};
use crate::render::icons::Icon;
use crate::render::sections::{SectionOutcome, SkipReason, paragraph_list, tag_list};

/// Render experience entries followed by education entries into the timeline.
pub fn render_timeline(
    doc: &mut Document,
    experience: &[Experience],
    education: &[Education],
) -> FolioResult<SectionOutcome> {
    if !doc.has(MountId::Timeline) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }
    if experience.is_empty() && education.is_empty() {
        doc.replace(MountId::Timeline, String::new());
        return Ok(SectionOutcome::Skipped(SkipReason::NoData));
    }

    let mut items = Vec::with_capacity(experience.len() + education.len());
    for (i, exp) in experience.iter().enumerate() {
        items.push(experience_item(i, exp)?);
    }
    for (i, edu) in education.iter().enumerate() {
        items.push(education_item(i, edu)?);
    }

    let count = items.len();
    doc.replace(MountId::Timeline, items.concat());
    Ok(SectionOutcome::Rendered { items: count })
}

fn experience_item(index: usize, exp: &Experience) -> FolioResult<String> {
    require(&exp.company, &format!("experience[{index}].company"))?;
    require(&exp.role, &format!("experience[{index}].role"))?;
    require(&exp.duration, &format!("experience[{index}].duration"))?;

    // Flat bullets first, then one block per sub-project; an entry may carry both.
    let mut desc = String::new();
    if !exp.description.is_empty() {
        desc.push_str(&format!(
            r#"<div class="timeline__desc">{}</div>"#,
            paragraph_list("timeline__desc-item", &exp.description)
        ));
    }
    for (j, sub) in exp.projects.iter().enumerate() {
        desc.push_str(&sub_project_block(index, j, sub)?);
    }

    let tags = exp.tech_tags();
    let tech = if tags.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="timeline__tech">{}</div>"#,
            tag_list("timeline__tech-tag", &tags)
        )
    };

    Ok(format!(
        r#"<div class="timeline__item reveal"><div class="timeline__marker timeline__marker--work"></div><div class="timeline__content"><span class="timeline__badge timeline__badge--work">Experience</span><h3 class="timeline__title">{role}</h3><p class="timeline__company">{company}</p><span class="timeline__date">{icon} {duration}</span>{desc}{tech}</div></div>"#,
        role = escape(&exp.role),
        company = escape(&exp.company),
        icon = Icon::Calendar.svg(),
        duration = escape(&exp.duration),
    ))
}

fn sub_project_block(index: usize, sub_index: usize, sub: &SubProject) -> FolioResult<String> {
    require(
        &sub.name,
        &format!("experience[{index}].projects[{sub_index}].name"),
    )?;
    let headline = if sub.description.trim().is_empty() {
        format!("<strong>{}</strong>", escape(&sub.name))
    } else {
        format!(
            "<strong>{}</strong> – {}",
            escape(&sub.name),
            escape(&sub.description)
        )
    };
    Ok(format!(
        r#"<div class="timeline__desc timeline__desc--project"><p class="timeline__desc-item">{headline}</p>{}</div>"#,
        paragraph_list("timeline__desc-item", &sub.responsibilities)
    ))
}

fn education_item(index: usize, edu: &Education) -> FolioResult<String> {
    require(&edu.degree, &format!("education[{index}].degree"))?;
    require(&edu.institution, &format!("education[{index}].institution"))?;

    let info = edu
        .info_line()
        .map(|line| {
            format!(
                r#"<span class="timeline__date">{} {}</span>"#,
                Icon::Calendar.svg(),
                escape(&line)
            )
        })
        .unwrap_or_default();

    Ok(format!(
        r#"<div class="timeline__item reveal"><div class="timeline__marker timeline__marker--edu"></div><div class="timeline__content"><span class="timeline__badge timeline__badge--edu">Education</span><h3 class="timeline__title">{}</h3><p class="timeline__company">{}</p>{info}</div></div>"#,
        escape(&edu.degree),
        escape(&edu.institution),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp(company: &str) -> Experience {
        Experience {
            company: company.into(),
            role: "Dev".into(),
            duration: "2020 – 2021".into(),
            description: vec!["Shipped".into()],
            projects: vec![],
            tech_stack: Some(vec!["Rust".into()]),
        }
    }

    #[test]
    fn experience_precedes_education() {
        let mut doc = Document::embedded().unwrap();
        let edu = Education {
            degree: "BSc".into(),
            institution: "Uni".into(),
            status: Some("Pursuing".into()),
            ..Education::default()
        };
        let out = render_timeline(&mut doc, &[exp("A"), exp("B")], &[edu]).unwrap();
        assert_eq!(out, SectionOutcome::Rendered { items: 3 });
        let html = doc.content(MountId::Timeline).unwrap();
        assert!(html.find(">A<").unwrap() < html.find(">B<").unwrap());
        assert!(html.find(">B<").unwrap() < html.find("BSc").unwrap());
        assert!(html.contains("Pursuing"));
    }

    #[test]
    fn bullets_and_sub_projects_are_additive() {
        let mut doc = Document::embedded().unwrap();
        let mut e = exp("Both");
        e.projects = vec![SubProject {
            name: "Nested".into(),
            description: "inner".into(),
            responsibilities: vec!["did".into()],
            tech_stack: vec!["Go".into()],
        }];
        render_timeline(&mut doc, &[e], &[]).unwrap();
        let html = doc.content(MountId::Timeline).unwrap();
        let flat = html.find("Shipped").unwrap();
        let nested = html.find("<strong>Nested</strong>").unwrap();
        assert!(flat < nested);
        // Entry-level tags win over sub-project tags.
        assert!(html.contains(r#"<span class="timeline__tech-tag">Rust</span>"#));
        assert!(!html.contains(r#"<span class="timeline__tech-tag">Go</span>"#));
    }

    #[test]
    fn sub_project_tags_used_without_entry_tags() {
        let mut doc = Document::embedded().unwrap();
        let mut e = exp("Nested only");
        e.description.clear();
        e.tech_stack = None;
        e.projects = vec![SubProject {
            name: "P".into(),
            tech_stack: vec!["Go".into(), "K8s".into()],
            ..SubProject::default()
        }];
        render_timeline(&mut doc, &[e], &[]).unwrap();
        let html = doc.content(MountId::Timeline).unwrap();
        assert!(html.contains(
            r#"<span class="timeline__tech-tag">Go</span><span class="timeline__tech-tag">K8s</span>"#
        ));
        assert!(!html.contains(r#"<div class="timeline__desc">"#));
    }

    #[test]
    fn missing_company_is_reported_by_path() {
        let mut doc = Document::embedded().unwrap();
        let err = render_timeline(&mut doc, &[exp("ok"), exp("")], &[]).unwrap_err();
        assert!(err.to_string().contains("experience[1].company"));
    }
}
