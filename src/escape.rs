//! Escaping for values interpolated into card markup.
//!
//! Listing fields are user-supplied; every one of them passes through one of
//! these two functions before reaching a template. Missing values render as
//! the empty string.

/// Escapes text content: `&`, `<`, `>`, `"`, `'` (and `/`).
pub fn escape_html(value: Option<&str>) -> String {
    value.map(tera::escape_html).unwrap_or_default()
}

/// Escapes a value placed inside a double-quoted attribute.
///
/// Besides `"` this also neutralizes `&`, `<`, `>`, quotes, backticks and
/// whitespace, which keeps the value inert even in an unquoted attribute.
pub fn escape_attr(value: Option<&str>) -> String {
    value.map(ammonia::clean_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_are_empty() {
        assert_eq!(escape_html(None), "");
        assert_eq!(escape_attr(None), "");
    }

    #[test]
    fn html_escapes_markup_characters() {
        let escaped = escape_html(Some(r#"<script>alert("x" & 'y')</script>"#));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.starts_with("&lt;script&gt;"));
        assert!(escaped.contains("&quot;x&quot;"));
        assert!(escaped.contains("&amp;"));
    }

    #[test]
    fn html_leaves_plain_text_alone() {
        assert_eq!(escape_html(Some("Camp Sunny Bay")), "Camp Sunny Bay");
    }

    #[test]
    fn attr_escapes_quotes_and_angle_brackets() {
        let escaped = escape_attr(Some(r#"a" onmouseover="x<y>&"#));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.contains("&quot;"));
        assert!(escaped.contains("&amp;"));
    }
}
