//! RSS feed generation.
//!
//! Projects the post collection, in collection order, into `<item>` entries
//! and substitutes them into `feed.xml.template`. Item descriptions carry the
//! post's converted body run through the URL rewriter so embedded links and
//! assets resolve outside the site; title and description text is
//! HTML-escaped before substitution.

use crate::{
    config::BlogConfig,
    paths::{PathLayout, POSTS_DIR_NAME},
    post::Post,
    rewrite::{UrlRewriter, join_url},
    template::{self, Substitutions},
    utils::html::escape_html,
};
use anyhow::{Context, Result};
use std::fs;

/// Name of the feed template under the templates directory.
const FEED_TEMPLATE: &str = "feed.xml.template";

/// RSS feed builder over the full post collection.
pub struct RssFeed<'a> {
    config: &'a BlogConfig,
    posts: &'a [Post],
}

impl<'a> RssFeed<'a> {
    pub fn new(config: &'a BlogConfig, posts: &'a [Post]) -> Self {
        Self { config, posts }
    }

    /// Render one `<item>` per post, in collection order.
    fn items(&self) -> String {
        let rewriter = UrlRewriter::new(&self.config.url, POSTS_DIR_NAME);

        self.posts
            .iter()
            .map(|post| {
                let title = escape_html(&post.title);
                let link = join_url(&self.config.url, &post.remote_path);
                let description = escape_html(&rewriter.rewrite(&post.html_content));
                format!(
                    "<item><title>{title}</title><link>{link}</link>\
                     <description>{description}</description></item>"
                )
            })
            .collect()
    }

    /// Substitute channel metadata and items into the feed template.
    fn into_xml(self, feed_template: &str) -> Result<String> {
        let vars = Substitutions::from([
            ("blog_title", self.config.title.clone()),
            ("blog_url", self.config.url.clone()),
            ("blog_description", self.config.description.clone()),
            ("rss_items", self.items()),
        ]);
        Ok(template::substitute(feed_template, &vars)?)
    }

    /// Generate the feed and write it to `<output root>/feed.xml`.
    pub fn write(self, paths: &PathLayout) -> Result<()> {
        let template_path = paths.template(FEED_TEMPLATE);
        let feed_template = fs::read_to_string(&template_path)
            .with_context(|| format!("Failed to read `{}`", template_path.display()))?;

        let xml = self.into_xml(&feed_template)?;

        let feed_path = paths.dst_dir.join("feed.xml");
        fs::write(&feed_path, xml)
            .with_context(|| format!("Failed to write feed to `{}`", feed_path.display()))?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config, post::tests::make_post};

    const TEMPLATE: &str = "<rss><channel><title>${blog_title}</title>\
        <link>${blog_url}</link>${rss_items}</channel></rss>";

    #[test]
    fn test_items_collection_order() {
        let config = config::tests_config();
        let posts = vec![
            make_post("second", "2023-01-01", &[]),
            make_post("first", "2024-01-01", &[]),
        ];

        // Collection order, not date order
        let items = RssFeed::new(&config, &posts).items();
        assert!(items.find("second").unwrap() < items.find("first").unwrap());
    }

    #[test]
    fn test_item_fields() {
        let config = config::tests_config();
        let mut post = make_post("hello", "2024-01-01", &[]);
        post.title = "Tips & Tricks".to_string();
        post.html_content = "<p>body</p>".to_string();
        let posts = vec![post];

        let items = RssFeed::new(&config, &posts).items();
        assert!(items.contains("<title>Tips &amp; Tricks</title>"));
        assert!(items.contains("<link>https://blog.example/posts/hello.html</link>"));
        assert!(items.contains("<description>&lt;p&gt;body&lt;/p&gt;</description>"));
    }

    #[test]
    fn test_item_description_urls_absolute() {
        let config = config::tests_config();
        let mut post = make_post("hello", "2024-01-01", &[]);
        post.html_content = r#"<img src="img.png">"#.to_string();
        let posts = vec![post];

        let items = RssFeed::new(&config, &posts).items();
        // Rewritten to absolute, then escaped for the XML text node
        assert!(items.contains("src=&quot;https://blog.example/posts/img.png&quot;"));
    }

    #[test]
    fn test_into_xml_channel_metadata() {
        let config = config::tests_config();
        let posts = vec![make_post("a", "2024-01-01", &[])];

        let xml = RssFeed::new(&config, &posts).into_xml(TEMPLATE).unwrap();
        assert!(xml.starts_with("<rss><channel><title>My Blog</title>"));
        assert!(xml.contains("<link>https://blog.example/</link>"));
        assert_eq!(xml.matches("<item>").count(), 1);
    }

    #[test]
    fn test_into_xml_empty_collection() {
        let config = config::tests_config();
        let xml = RssFeed::new(&config, &[]).into_xml(TEMPLATE).unwrap();
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_into_xml_missing_placeholder_fails() {
        let config = config::tests_config();
        let result = RssFeed::new(&config, &[]).into_xml("${rss_items}${unknown}");
        assert!(result.is_err());
    }
}
