use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::{Resume, require};
use crate::render::document::{Document, MountId};
use crate::render::icons::Icon;
use crate::render::sections::{SectionOutcome, SkipReason};

const DEFAULT_LABEL: &str = "Download Resume";

/// Render the resume download call-to-action.
pub fn render_resume_cta(
    doc: &mut Document,
    resume: Option<&Resume>,
) -> FolioResult<SectionOutcome> {
    if !doc.has(MountId::ResumeCta) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }
    let Some(resume) = resume else {
        doc.replace(MountId::ResumeCta, String::new());
        return Ok(SectionOutcome::Skipped(SkipReason::NoData));
    };
    require(&resume.file, "resume.file")?;

    let label = if resume.download_label.trim().is_empty() {
        DEFAULT_LABEL
    } else {
        resume.download_label.as_str()
    };

    let html = format!(
        r#"<div class="resume-cta__text"><h2 class="resume-cta__title">Want the full picture?</h2><p class="resume-cta__subtitle">Download my resume for a comprehensive overview of my experience, skills, and education.</p></div><a href="{href}" download class="btn btn--primary btn--lg btn--glow resume-cta__btn">{icon}<span>{label}</span></a>"#,
        href = escape(&resume.file),
        icon = Icon::Download.svg(),
        label = escape(label),
    );
    doc.replace(MountId::ResumeCta, html);
    Ok(SectionOutcome::Rendered { items: 1 })
}
