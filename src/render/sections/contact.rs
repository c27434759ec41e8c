use crate::foundation::error::FolioResult;
use crate::foundation::sanitize::escape;
use crate::profile::model::Personal;
use crate::render::document::{Document, MountId};
use crate::render::icons::Icon;
use crate::render::sections::{RenderContext, SectionOutcome, SkipReason, non_blank};

const INTRO: &str = "I'm always open to discussing new opportunities, interesting projects, or just having a conversation about technology. Feel free to reach out!";

/// Render contact cards: primary email, phone, external profile and location, each only
/// when present.
pub fn render_contact(
    doc: &mut Document,
    personal: &Personal,
    ctx: &RenderContext,
) -> FolioResult<SectionOutcome> {
    if !doc.has(MountId::ContactInfo) {
        return Ok(SectionOutcome::Skipped(SkipReason::NoMount));
    }

    let mut cards = Vec::new();
    if let Some(email) = personal.primary_email() {
        let email = escape(email);
        cards.push(card(
            Some(&format!("mailto:{email}")),
            false,
            Icon::Mail,
            "Email",
            &email,
        ));
    }
    if let Some(phone) = non_blank(&personal.phone) {
        let prefix = escape(&ctx.phone_prefix);
        let phone = escape(phone);
        cards.push(card(
            Some(&format!("tel:{prefix}{phone}")),
            false,
            Icon::Phone,
            "Phone",
            &format!("{prefix} {phone}"),
        ));
    }
    if let Some(handle) = non_blank(&personal.external_profile) {
        cards.push(card(
            Some(&escape(&ctx.profile_url)),
            true,
            Icon::Profile,
            "LinkedIn",
            &escape(handle),
        ));
    }
    if let Some(location) = non_blank(&personal.location) {
        cards.push(card(None, false, Icon::Location, "Location", &escape(location)));
    }

    let count = cards.len();
    doc.replace(
        MountId::ContactInfo,
        format!(
            r#"<p class="contact__text">{INTRO}</p><div class="contact__cards">{}</div>"#,
            cards.concat()
        ),
    );
    Ok(SectionOutcome::Rendered { items: count })
}

/// `href` and `value_html` must already be escaped.
fn card(href: Option<&str>, external: bool, icon: Icon, label: &str, value_html: &str) -> String {
    let body = format!(
        r#"<div class="contact-card__icon">{}</div><div><p class="contact-card__label">{label}</p><p class="contact-card__value">{value_html}</p></div>"#,
        icon.svg()
    );
    match href {
        Some(href) if external => format!(
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer" class="contact-card">{body}</a>"#
        ),
        Some(href) => format!(r#"<a href="{href}" class="contact-card">{body}</a>"#),
        None => format!(r#"<div class="contact-card">{body}</div>"#),
    }
}
