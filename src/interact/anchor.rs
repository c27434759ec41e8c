use crate::effects::scroll::PageLayout;

/// Scroll offset for an in-page link, or `None` when the link should be left alone.
///
/// `#` on its own, non-fragment links and fragments naming no measured section are ignored.
/// The result lands the section's top just below the live header.
pub fn smooth_scroll_target(href: &str, layout: &PageLayout) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    let section = layout.section(id)?;
    Some((section.top - layout.header_height()).max(0.0))
}
