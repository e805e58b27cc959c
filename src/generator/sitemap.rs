//! Sitemap generation.
//!
//! Projects every post plus the fixed top-level pages into `<url>` entries
//! and substitutes them into `sitemap.xml.template`. Each entry carries the
//! absolute page URL and the build date as its last modification date.

use crate::{
    config::BlogConfig,
    paths::PathLayout,
    post::Post,
    rewrite::join_url,
    template::{self, Substitutions},
};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

const SITEMAP_TEMPLATE: &str = "sitemap.xml.template";

/// Top-level pages listed after the posts, in this order.
const TOP_LEVEL_PAGES: [&str; 4] = ["index.html", "articles.html", "tags.html", "about.html"];

/// Sitemap builder over the full post collection.
pub struct Sitemap<'a> {
    config: &'a BlogConfig,
    posts: &'a [Post],
}

impl<'a> Sitemap<'a> {
    pub fn new(config: &'a BlogConfig, posts: &'a [Post]) -> Self {
        Self { config, posts }
    }

    /// Render one `<url>` entry per post and top-level page.
    fn items(&self, lastmod: &str) -> String {
        let post_urls = self
            .posts
            .iter()
            .map(|post| join_url(&self.config.url, &post.remote_path));
        let page_urls = TOP_LEVEL_PAGES
            .iter()
            .map(|page| join_url(&self.config.url, page));

        post_urls
            .chain(page_urls)
            .map(|loc| format!("<url><loc>{loc}</loc><lastmod>{lastmod}</lastmod></url>"))
            .collect()
    }

    fn into_xml(self, sitemap_template: &str, lastmod: &str) -> Result<String> {
        let vars = Substitutions::from([("sitemap_items", self.items(lastmod))]);
        Ok(template::substitute(sitemap_template, &vars)?)
    }

    /// Generate the sitemap and write it to `<output root>/sitemap.xml`.
    pub fn write(self, paths: &PathLayout) -> Result<()> {
        let template_path = paths.template(SITEMAP_TEMPLATE);
        let sitemap_template = fs::read_to_string(&template_path)
            .with_context(|| format!("Failed to read `{}`", template_path.display()))?;

        let lastmod = Local::now().format("%Y-%m-%d").to_string();
        let xml = self.into_xml(&sitemap_template, &lastmod)?;

        let sitemap_path = paths.dst_dir.join("sitemap.xml");
        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to `{}`", sitemap_path.display()))?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
