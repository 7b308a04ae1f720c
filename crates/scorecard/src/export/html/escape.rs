//! HTML escaping for user-supplied text.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>` and `"` for embedding in element content or a
/// double-quoted attribute. Applied unconditionally to every user-supplied
/// string.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape("Away Batting"), Cow::Borrowed(_)));
    }
}
