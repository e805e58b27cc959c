//! Relative-to-absolute URL rewriting for feed generation.
//!
//! Scans already-converted HTML for link-bearing attributes (`href`, `src`)
//! inside anchor/image/script/stylesheet-link tags and for `url(...)`
//! references, and rewrites each relative URL to an absolute URL anchored at
//! the base site URL. Everything outside the matched URL token is preserved
//! exactly; replacements are spliced in by match position so later matches
//! are never mis-offset by earlier replacements of a different length.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `url(` or a link-bearing attribute up to the URL value, capturing
/// the value. `#` is excluded from the value class, so fragment-only
/// references never match.
static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:url\(|<(?:link|a|script|img)[^>]+(?:src|href)\s*=\s*)['"]?([^'"\)\s>#]+)"#)
        .unwrap()
});

/// Join a site-relative path onto a base URL with exactly one slash.
pub fn join_url(base: &str, rel: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

/// Rewrites relative URLs in HTML against a base site URL.
#[derive(Debug, Clone, Copy)]
pub struct UrlRewriter<'a> {
    base_url: &'a str,
    posts_dir: &'a str,
}

impl<'a> UrlRewriter<'a> {
    /// `posts_dir` is the directory name sitting between the base URL and a
    /// post-relative link, e.g. `posts`.
    pub const fn new(base_url: &'a str, posts_dir: &'a str) -> Self {
        Self {
            base_url,
            posts_dir,
        }
    }

    /// Rewrite every relative URL in `content` to an absolute one.
    pub fn rewrite(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(content.len());
        let mut last_end = 0;

        for caps in RE_URL.captures_iter(content) {
            let m = caps.get(1).expect("capture group 1 always present");
            let value = m.as_str();

            let Some(absolute) = self.rewrite_value(value) else {
                continue;
            };

            out.push_str(&content[last_end..m.start()]);
            out.push_str(&absolute);
            last_end = m.end();
        }

        out.push_str(&content[last_end..]);
        out
    }

    /// Rewrite a single URL value, or `None` when it must stay untouched.
    fn rewrite_value(&self, value: &str) -> Option<String> {
        if value.starts_with("http://")
            || value.starts_with("https://")
            || value.starts_with("data:")
        {
            return None;
        }

        if let Some(rooted) = value.strip_prefix('/') {
            // Site-root-relative: join to the base URL
            return Some(self.join(rooted.trim_start_matches('/')));
        }

        if value.starts_with("../") {
            // Post-relative link one level up: strip the parent markers and
            // join directly; no general `..` collapsing
            let mut rest = value;
            while let Some(stripped) = rest.strip_prefix("../") {
                rest = stripped;
            }
            return Some(self.join(rest));
        }

        // Anything else is relative to the posts directory
        Some(self.join(&format!("{}/{}", self.posts_dir, value)))
    }

    fn join(&self, rel: &str) -> String {
        join_url(self.base_url, rel)
    }
}

// ============================================================================
// Tests
// ============================================================================
