//! Top-level page assembly.
//!
//! A [`Page`] is a markdown document rendered at the output site's top level
//! (not dated or tagged). Two specializations append generated fragments to
//! the converted body before templating: [`TagsPage`] adds the tag cloud,
//! [`ArticlesPage`] adds the date-descending article listing. Both hold a
//! read-only reference to the full post collection and never mutate it.

use crate::{
    config::BlogConfig,
    converter::{ConvertError, MarkdownConverter},
    paths::PathLayout,
    post::Post,
    tags::TagIndex,
    template::{self, TemplateError},
};
use std::path::{Path, PathBuf};

/// A markdown document rendered at the output site's top level.
#[derive(Debug, Clone)]
pub struct Page {
    pub src_path: PathBuf,
    pub dst_path: PathBuf,
    pub title: String,
    pub html_content: String,
}

impl Page {
    pub fn load(paths: &PathLayout, src_path: &Path) -> Self {
        let title = src_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            src_path: src_path.to_path_buf(),
            dst_path: PathLayout::src_to_dst_path(src_path, &paths.dst_dir, "html"),
            title,
            html_content: String::new(),
        }
    }

    /// Convert the markdown body to HTML through the external converter.
    pub fn convert(&mut self, converter: &dyn MarkdownConverter) -> Result<(), ConvertError> {
        self.html_content = converter.convert(&self.src_path)?;
        Ok(())
    }

    /// Substitute the body into the page template verbatim.
    pub fn render(
        &self,
        page_template: &str,
        config: &BlogConfig,
        paths: &PathLayout,
    ) -> Result<String, TemplateError> {
        self.render_with(page_template, config, paths, &self.title, &self.html_content)
    }

    fn render_with(
        &self,
        page_template: &str,
        config: &BlogConfig,
        paths: &PathLayout,
        title: &str,
        content: &str,
    ) -> Result<String, TemplateError> {
        let mut vars = template::base_substitutions(config, paths);
        vars.insert("page_title", title.to_string());
        vars.insert("page_content", content.to_string());
        template::substitute(page_template, &vars)
    }
}

/// The tags page: converted body plus the tag cloud.
pub struct TagsPage<'a> {
    pub page: Page,
    posts: &'a [Post],
}

impl<'a> TagsPage<'a> {
    pub fn new(page: Page, posts: &'a [Post]) -> Self {
        Self { page, posts }
    }

    pub fn render(
        &self,
        page_template: &str,
        config: &BlogConfig,
        paths: &PathLayout,
    ) -> Result<String, TemplateError> {
        let content = format!("{}{}", self.page.html_content, tag_cloud(self.posts));
        self.page
            .render_with(page_template, config, paths, "Tags", &content)
    }
}

/// The articles page: converted body plus the full post listing.
pub struct ArticlesPage<'a> {
    pub page: Page,
    posts: &'a [Post],
}

impl<'a> ArticlesPage<'a> {
    pub fn new(page: Page, posts: &'a [Post]) -> Self {
        Self { page, posts }
    }

    pub fn render(
        &self,
        page_template: &str,
        config: &BlogConfig,
        paths: &PathLayout,
    ) -> Result<String, TemplateError> {
        let content = format!("{}{}", self.page.html_content, article_listing(self.posts));
        self.page
            .render_with(page_template, config, paths, "Articles", &content)
    }
}

// ============================================================================
// Fragment Builders
// ============================================================================

/// Render the tag cloud: every distinct tag as a clickable element annotated
/// with its occurrence count, ordered by descending count. The query
/// parameter is percent-encoded.
fn tag_cloud(posts: &[Post]) -> String {
    let index = TagIndex::from_posts(posts);

    let mut html = String::from("<div class=\"tags\">");
    for entry in index.ranked() {
        html.push_str(&format!(
            "<div class=\"tag\" onclick=\"location.href='articles.html?tag={}'\">",
            urlencoding::encode(&entry.tag)
        ));
        html.push_str(&format!("<div class=\"tag-text\">{}</div>", entry.tag));
        html.push_str(&format!("<div class=\"tag-count\">{}</div>", entry.count));
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

/// Render the article listing: all posts by descending date, each entry
/// showing the date and a link to the post's site-relative path.
fn article_listing(posts: &[Post]) -> String {
    let mut ordered: Vec<&Post> = posts.iter().collect();
    // Dates are fixed-width ISO, so string comparison is date comparison
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let mut html = String::from("<article><ul class=\"articles\">");
    for post in ordered {
        html.push_str(&format!(
            "<li class=\"article-entry\" id=\"{}\">",
            post.filename
        ));
        html.push_str(&format!(
            "<div class=\"article-date\">[{}]</div>",
            post.date
        ));
        html.push_str(&format!(
            "<div class=\"article-title\"><a href=\"{}\">{}</a></div>",
            post.remote_path, post.title
        ));
        html.push_str("</li>");
    }
    html.push_str("</ul></article>");
    html
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config, post::tests::make_post};

    fn layout() -> PathLayout {
        PathLayout::new(Path::new("/site"))
    }

    #[test]
    fn test_page_load_title_from_stem() {
        let page = Page::load(&layout(), Path::new("/site/src/about.md"));
        assert_eq!(page.title, "about");
        assert_eq!(page.dst_path, PathBuf::from("/site/dst/about.html"));
    }

    #[test]
    fn test_page_render_verbatim_body() {
        let mut page = Page::load(&layout(), Path::new("/site/src/about.md"));
        page.html_content = "<p>hi</p>".to_string();

        let out = page
            .render("<title>${page_title}</title>${page_content}", &config::tests_config(), &layout())
            .unwrap();
        assert_eq!(out, "<title>about</title><p>hi</p>");
    }

    #[test]
    fn test_page_render_missing_key_fails() {
        let page = Page::load(&layout(), Path::new("/site/src/about.md"));
        let err = page
            .render("${no_such_key}", &config::tests_config(), &layout())
            .unwrap_err();
        assert!(matches!(err, TemplateError::UndefinedPlaceholder(_)));
    }

    #[test]
    fn test_tags_page_title_and_cloud() {
        let posts = vec![
            make_post("a", "2024-01-01", &["rust", "web"]),
            make_post("b", "2024-01-02", &["rust"]),
        ];
        let page = Page::load(&layout(), Path::new("/site/src/tags.md"));
        let tags_page = TagsPage::new(page, &posts);

        let out = tags_page
            .render("${page_title}|${page_content}", &config::tests_config(), &layout())
            .unwrap();
        assert!(out.starts_with("Tags|"));
        assert!(out.contains("<div class=\"tag-text\">rust</div>"));
        assert!(out.contains("<div class=\"tag-count\">2</div>"));
        assert!(out.contains("articles.html?tag=web"));
    }

    #[test]
    fn test_articles_page_descending_date_order() {
        let posts = vec![
            make_post("oldest", "2023-01-01", &[]),
            make_post("newest", "2024-06-15", &[]),
            make_post("middle", "2023-06-01", &[]),
        ];
        let page = Page::load(&layout(), Path::new("/site/src/articles.md"));
        let articles = ArticlesPage::new(page, &posts);

        let out = articles
            .render("${page_content}", &config::tests_config(), &layout())
            .unwrap();

        let newest = out.find("newest.html").unwrap();
        let middle = out.find("middle.html").unwrap();
        let oldest = out.find("oldest.html").unwrap();
        assert!(newest < middle && middle < oldest);
        assert!(out.contains("[2024-06-15]"));
    }

    #[test]
    fn test_articles_page_links_site_relative() {
        let posts = vec![make_post("hello", "2024-01-01", &[])];
        let page = Page::load(&layout(), Path::new("/site/src/articles.md"));
        let articles = ArticlesPage::new(page, &posts);

        let out = articles
            .render("${page_content}", &config::tests_config(), &layout())
            .unwrap();
        assert!(out.contains("<a href=\"posts/hello.html\">hello</a>"));
    }

    #[test]
    fn test_tag_cloud_empty_posts() {
        assert_eq!(tag_cloud(&[]), "<div class=\"tags\"></div>");
    }

    #[test]
    fn test_article_listing_does_not_reorder_input() {
        let posts = vec![
            make_post("a", "2023-01-01", &[]),
            make_post("b", "2024-01-01", &[]),
        ];
        article_listing(&posts);
        // The shared collection must stay in collection order
        assert_eq!(posts[0].title, "a");
        assert_eq!(posts[1].title, "b");
    }
}
