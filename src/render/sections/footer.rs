use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::Personal;
use crate::render::document::{Document, MountId};
use crate::render::icons::Icon;
use crate::render::sections::{RenderContext, SectionOutcome, SkipReason, any_mount, non_blank};

/// Render footer social links (email, external profile, phone), the year and owner name.
pub fn render_footer(
    doc: &mut Document,
    personal: &Personal,
    ctx: &RenderContext,
) -> FolioResult<SectionOutcome> {
    if !any_mount(
        doc,
        &[MountId::FooterSocials, MountId::CurrentYear, MountId::FooterName],
    ) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }

    let mut socials = Vec::new();
    if let Some(email) = personal.primary_email() {
        socials.push(format!(
            r#"<a href="mailto:{}" aria-label="Email" class="footer__social">{}</a>"#,
            escape(email),
            Icon::Mail.svg()
        ));
    }
    if non_blank(&personal.external_profile).is_some() {
        socials.push(format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" class="footer__social">{}</a>"#,
            escape(&ctx.profile_url),
            Icon::Profile.svg()
        ));
    }
    if let Some(phone) = non_blank(&personal.phone) {
        socials.push(format!(
            r#"<a href="tel:{}{}" aria-label="Phone" class="footer__social">{}</a>"#,
            escape(&ctx.phone_prefix),
            escape(phone),
            Icon::Phone.svg()
        ));
    }

    let count = socials.len();
    doc.replace(MountId::FooterSocials, socials.concat());
    doc.replace(MountId::CurrentYear, ctx.year.to_string());
    doc.replace(MountId::FooterName, escape(personal.name.trim()));
    Ok(SectionOutcome::Rendered { items: count })
}
