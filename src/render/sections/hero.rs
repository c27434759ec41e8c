use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::{Profile, require};
use crate::render::document::{Document, MountId};
use crate::render::sections::{RenderContext, SectionOutcome, SkipReason, any_mount};

/// Resume link target when the profile names no file.
const DEFAULT_RESUME_HREF: &str = "resume.pdf";

const MOUNTS: [MountId; 8] = [
    MountId::PageTitle,
    MountId::NavLogo,
    MountId::HeroName,
    MountId::HeroRole,
    MountId::HeroTagline,
    MountId::HeroCode,
    MountId::NavResume,
    MountId::HeroResume,
];

/// Fill the identity mounts: title, logo, name, role, tagline, code card and resume links.
///
/// Name and role are required.
pub fn render_hero(
    doc: &mut Document,
    profile: &Profile,
    ctx: &RenderContext,
) -> FolioResult<SectionOutcome> {
    if !any_mount(doc, &MOUNTS) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }

    let personal = &profile.personal;
    require(&personal.name, "personal.name")?;
    require(&personal.role, "personal.role")?;

    let name = escape(&personal.name);
    let role = escape(&personal.role);
    let first_name = personal
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    doc.replace(MountId::PageTitle, format!("{name} | {role}"));
    doc.replace(MountId::NavLogo, escape(&first_name));
    doc.replace(MountId::HeroName, name.clone());
    doc.replace(MountId::HeroRole, role.clone());
    doc.replace(MountId::HeroTagline, escape(&profile.summary));
    doc.replace(
        MountId::HeroCode,
        code_card(&name, &role, personal.location.as_deref(), &first_name, ctx),
    );

    let href = profile
        .resume
        .as_ref()
        .filter(|r| !r.file.trim().is_empty())
        .map_or_else(|| DEFAULT_RESUME_HREF.to_string(), |r| escape(&r.file));
    doc.replace(MountId::NavResume, href.clone());
    doc.replace(MountId::HeroResume, href);

    Ok(SectionOutcome::Rendered { items: 1 })
}

/// Syntax-highlighted "developer" declaration; `name` and `role` arrive already escaped.
fn code_card(
    name: &str,
    role: &str,
    location: Option<&str>,
    first_name: &str,
    ctx: &RenderContext,
) -> String {
    let location = escape(location.unwrap_or_default());
    let years = ctx.years_experience;
    [
        r#"<span class="hl-kw">interface</span> <span class="hl-type">Developer</span> <span class="hl-punc">{</span>"#.to_string(),
        field("name", &format!(r#"<span class="hl-str">"{name}"</span>"#)),
        field("role", &format!(r#"<span class="hl-str">"{role}"</span>"#)),
        field("experience", &format!(r#"<span class="hl-str">"{years}+ years"</span>"#)),
        field("location", &format!(r#"<span class="hl-str">"{location}"</span>"#)),
        field("passion", r#"<span class="hl-bool">Infinity</span>"#),
        r#"<span class="hl-punc">}</span>"#.to_string(),
        String::new(),
        format!(
            r#"<span class="hl-kw">const</span> {}<span class="hl-punc">:</span> <span class="hl-type">Developer</span><span class="hl-punc">;</span>"#,
            escape(first_name)
        ),
    ]
    .join("\n")
}

fn field(key: &str, value_html: &str) -> String {
    // Values line up in one column after the longest key ("experience").
    let pad = " ".repeat("experience".len() - key.len());
    format!(
        r#"  <span class="hl-key">{key}</span><span class="hl-punc">:</span> {pad}{value_html}<span class="hl-punc">;</span>"#
    )
}
