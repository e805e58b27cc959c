//! Tag-mapping script generation.
//!
//! Substitutes the post-filename-to-tags mapping and the theme settings into
//! `mdblog.js.template` and writes the result to `js/tags.js` under the
//! output root. The mapping keys match the `id` attributes of the article
//! listing entries, so the script can filter the listing client-side.

use crate::{
    config::BlogConfig,
    paths::PathLayout,
    post::Post,
    template::{self, Substitutions},
};
use anyhow::{Context, Result};
use std::fs;

const SCRIPT_TEMPLATE: &str = "mdblog.js.template";

/// Render the tag mapping object body, one entry per post in collection
/// order.
fn tag_mapping(posts: &[Post]) -> String {
    let entries: Vec<String> = posts
        .iter()
        .map(|post| {
            let tags: Vec<String> = post.tags.iter().map(|tag| format!("\"{tag}\"")).collect();
            format!("\"{}\": [{}]", post.filename, tags.join(", "))
        })
        .collect();
    format!("\n{}\n", entries.join(",\n"))
}

/// Generate the tag-mapping script and write it to `<output root>/js/tags.js`.
pub fn write(config: &BlogConfig, paths: &PathLayout, posts: &[Post]) -> Result<()> {
    let template_path = paths.template(SCRIPT_TEMPLATE);
    let script_template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read `{}`", template_path.display()))?;

    let vars = Substitutions::from([
        ("tag_mapping", tag_mapping(posts)),
        ("blog_theme", format!("\"{}\"", config.theme)),
        ("theme_can_toggle", format!("\"{}\"", config.theme_can_toggle)),
    ]);
    let script = template::substitute(&script_template, &vars)?;

    let script_path = paths.dst_js_dir.join("tags.js");
    fs::write(&script_path, script)
        .with_context(|| format!("Failed to write script to `{}`", script_path.display()))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
