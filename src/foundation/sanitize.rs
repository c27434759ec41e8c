//! Text escaping for profile data interpolated into markup.

/// Escape `text` so it renders as literal content inside an HTML element or a quoted attribute.
///
/// Encodes `&`, `<`, `>`, `"` and `'`. Every other character passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_neutralized() {
        let out = escape("<img src=x onerror=alert(1)>");
        assert_eq!(out, "&lt;img src=x onerror=alert(1)&gt;");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
    }

    #[test]
    fn ampersand_is_encoded_first() {
        assert_eq!(escape("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn quotes_cannot_break_attributes() {
        assert_eq!(escape(r#"" onclick='x'"#), "&quot; onclick=&#39;x&#39;");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape("January 2026 – Present"), "January 2026 – Present");
        assert_eq!(escape(""), "");
    }
}
