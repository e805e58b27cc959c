//! HTML/XML text escaping.

/// Escape special HTML/XML characters.
///
/// Callers escape any field that can legally contain delimiter characters of
/// the destination format before concatenation, not after.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("<test>"), "&lt;test&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_combined() {
        assert_eq!(
            escape_html("<a href=\"x\">a & b</a>"),
            "&lt;a href=&quot;x&quot;&gt;a &amp; b&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // `&` must be escaped before the other entities are introduced
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
