//! `${name}`-style placeholder substitution.
//!
//! Templates reference values by exact key; a placeholder whose key is absent
//! from the mapping is a hard error, not a silent no-op, which keeps every
//! template/mapping pair in sync. Substitution is a single pass: values are
//! inserted verbatim, never re-scanned for placeholders, and never escaped
//! (callers pre-escape where the destination format requires it).

use crate::{config::BlogConfig, paths::PathLayout};
use std::collections::HashMap;
use thiserror::Error;

/// Template substitution errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("undefined placeholder `${{{0}}}` in template")]
    UndefinedPlaceholder(String),

    #[error("unterminated placeholder starting at byte {0}")]
    UnterminatedPlaceholder(usize),
}

/// Substitution mapping from placeholder name to replacement text.
pub type Substitutions<'a> = HashMap<&'a str, String>;

/// Substitute every `${name}` placeholder in `template` from `vars`.
///
/// A lone `$` not followed by `{` is passed through unchanged.
pub fn substitute(template: &str, vars: &Substitutions) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar..];

        if let Some(brace_rest) = after.strip_prefix("${") {
            let close = brace_rest.find('}').ok_or_else(|| {
                TemplateError::UnterminatedPlaceholder(template.len() - rest.len() + dollar)
            })?;
            let name = &brace_rest[..close];
            let value = vars
                .get(name)
                .ok_or_else(|| TemplateError::UndefinedPlaceholder(name.to_string()))?;
            out.push_str(value);
            rest = &brace_rest[close + 1..];
        } else {
            out.push('$');
            rest = &after[1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Markup for the theme toggle button, emitted only when toggling is enabled.
const THEME_TOGGLE_HTML: &str = "<button class=\"theme_btn\" id=\"themeToggleBtn\">\
    <svg height=\"100%\" viewBox=\"0 0 16 16\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">\
    <path d=\"m 8 0 c -4.40625 0 -8 3.59375 -8 8 s 3.59375 8 8 8 s 8 -3.59375 8 -8 s -3.59375 -8 -8 -8 z \
m 0 1.941406 c 3.359375 0 6.058594 2.699219 6.058594 6.058594 s -2.699219 6.058594 -6.058594 6.058594 z m 0 0\"/>\
    </svg></button>";

/// The base substitution keys shared by every page-like output: blog
/// metadata, author/copyright, the site-relative asset directory paths and
/// the theme toggle fragment.
pub fn base_substitutions<'a>(config: &BlogConfig, paths: &PathLayout) -> Substitutions<'a> {
    let theme_toggle = if config.theme_can_toggle {
        THEME_TOGGLE_HTML.to_string()
    } else {
        String::new()
    };

    HashMap::from([
        ("blog_title", config.title.clone()),
        ("blog_description", config.description.clone()),
        ("blog_url", config.url.clone()),
        ("blog_theme", config.theme.clone()),
        ("author_mail", config.author_email.clone()),
        ("author_copyright", config.copyright.clone()),
        ("assets_dir", paths.site_relative(&paths.dst_assets_dir)),
        ("meta_dir", paths.site_relative(&paths.dst_meta_dir)),
        ("css_dir", paths.site_relative(&paths.dst_css_dir)),
        ("js_dir", paths.site_relative(&paths.dst_js_dir)),
        ("theme_toggle", theme_toggle),
    ])
}

// ============================================================================
// Tests
// ============================================================================
