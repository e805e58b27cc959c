//! robots.txt generation: substitutes the site URL into
//! `robots.txt.template` and writes the result to the output root.

use crate::{
    config::BlogConfig,
    paths::PathLayout,
    template::{self, Substitutions},
};
use anyhow::{Context, Result};
use std::fs;

const ROBOTS_TEMPLATE: &str = "robots.txt.template";

/// Generate robots.txt and write it to `<output root>/robots.txt`.
pub fn write(config: &BlogConfig, paths: &PathLayout) -> Result<()> {
    let template_path = paths.template(ROBOTS_TEMPLATE);
    let robots_template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read `{}`", template_path.display()))?;

    let vars = Substitutions::from([("blog_url", config.url.clone())]);
    let content = template::substitute(&robots_template, &vars)?;

    let robots_path = paths.dst_dir.join("robots.txt");
    fs::write(&robots_path, content)
        .with_context(|| format!("Failed to write robots.txt to `{}`", robots_path.display()))?;
    Ok(())
}
