//! Post parsing, header validation and rendering.
//!
//! Every post source file starts with a fixed six-line metadata header:
//!
//! ```text
//! ---
//! title: Hello World
//! description: The first post
//! date: 2024-06-15
//! tags: rust, blog
//! ---
//! ```
//!
//! Validation is an explicit state machine over those six lines with one
//! distinguishable error per expected field, so "fewer than six lines" and
//! "wrong field at position N" are first-class failures. A [`Post`] value
//! exists only if its header passed validation.

use crate::{
    config::BlogConfig,
    converter::{ConvertError, MarkdownConverter},
    paths::{PathLayout, POSTS_DIR_NAME},
    template::{self, Substitutions, TemplateError},
};
use anyhow::{Context, Result};
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use thiserror::Error;

/// Header validation errors, one per expected field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("the header must span the first six lines, found only {0}")]
    TooShort(usize),

    #[error("the starting marker \"---\" is missing or incorrect (line 1)")]
    StartMarker,

    #[error("the title field is missing, empty, or incorrect (line 2)")]
    Title,

    #[error("the description field is missing, empty, or incorrect (line 3)")]
    Description,

    #[error("the date field is missing, empty, or incorrect (line 4)")]
    Date,

    #[error("the tags field is missing, empty, or incorrect (line 5)")]
    Tags,

    #[error("the end marker \"---\" is missing or incorrect (line 6)")]
    EndMarker,
}

/// Metadata extracted from a validated six-line header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// `YYYY-MM-DD` with month 01-12 and day 01-31. Deliberately a range check
/// only: no month-length or leap-year cross-check.
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap());

/// Validate the first six lines of a post source and extract its metadata.
pub fn parse_header(content: &str) -> Result<Header, HeaderError> {
    let lines: Vec<&str> = content.lines().take(6).collect();
    if lines.len() < 6 {
        return Err(HeaderError::TooShort(lines.len()));
    }

    if lines[0].trim() != "---" {
        return Err(HeaderError::StartMarker);
    }

    let title = field_value(lines[1], "title:").ok_or(HeaderError::Title)?;
    let description = field_value(lines[2], "description:").ok_or(HeaderError::Description)?;

    let date = field_value(lines[3], "date:").ok_or(HeaderError::Date)?;
    if !RE_DATE.is_match(&date) {
        return Err(HeaderError::Date);
    }

    let tags_value = field_value(lines[4], "tags:").ok_or(HeaderError::Tags)?;
    let tags = parse_tags(&tags_value);

    if lines[5].trim() != "---" {
        return Err(HeaderError::EndMarker);
    }

    Ok(Header {
        title,
        description,
        date,
        tags,
    })
}

/// Extract the trimmed value after `prefix`, requiring non-empty content.
fn field_value(line: &str, prefix: &str) -> Option<String> {
    let value = line.strip_prefix(prefix)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Split a comma-separated tag list. Elements are trimmed of surrounding
/// whitespace and commas; empty elements are dropped; a bare single tag with
/// no comma is accepted.
fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|tag| tag.trim_matches(|c: char| c.is_whitespace() || c == ','))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A dated, tagged markdown document rendered into the posts section.
///
/// Created during post processing; immutable once validated and converted.
#[derive(Debug, Clone)]
pub struct Post {
    /// Markdown source path.
    pub src_path: PathBuf,
    /// Output HTML path.
    pub dst_path: PathBuf,
    /// Output path with the output-root segment removed, for in-site links.
    pub remote_path: String,
    /// Output file name, e.g. `hello.html`.
    pub filename: String,

    pub title: String,
    pub description: String,
    /// ISO date string; fixed-width, so lexicographic order is date order.
    pub date: String,
    /// Tag list in header order; deduplicated at display/count time.
    pub tags: Vec<String>,

    /// Converted HTML body, set once during generation.
    pub html_content: String,
}

impl Post {
    /// Read and validate a post source file.
    ///
    /// Fails with the violated header rule and the document path; no `Post`
    /// is produced for an invalid document.
    pub fn load(paths: &PathLayout, src_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(src_path)
            .with_context(|| format!("Failed to read `{}`", src_path.display()))?;

        let header = parse_header(&content)
            .with_context(|| format!("Failed to validate header of `{}`", src_path.display()))?;

        let dst_path = PathLayout::src_to_dst_path(src_path, &paths.dst_posts_dir, "html");
        let remote_path = paths.site_relative(&dst_path);
        let filename = dst_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        Ok(Self {
            src_path: src_path.to_path_buf(),
            dst_path,
            remote_path,
            filename,
            title: header.title,
            description: header.description,
            date: header.date,
            tags: header.tags,
            html_content: String::new(),
        })
    }

    /// Convert the markdown body to HTML through the external converter.
    pub fn convert(&mut self, converter: &dyn MarkdownConverter) -> Result<(), ConvertError> {
        self.html_content = converter.convert(&self.src_path)?;
        Ok(())
    }

    /// Substitute the converted body and metadata into the post template.
    pub fn render(
        &self,
        post_template: &str,
        config: &BlogConfig,
        paths: &PathLayout,
    ) -> Result<String, TemplateError> {
        let mut vars: Substitutions = template::base_substitutions(config, paths);
        vars.insert("post_title", self.title.clone());
        vars.insert("post_description", self.description.clone());
        vars.insert("post_author", config.author_name.clone());
        vars.insert("post_date", self.date.clone());
        vars.insert("post_content", self.html_content.clone());
        vars.insert("posts_url", format!("{}{}", config.url, POSTS_DIR_NAME));
        vars.insert("post_tags", self.tags_as_html());
        vars.insert("post_meta_tags", self.tags_as_meta());

        template::substitute(post_template, &vars)
    }

    /// Render the post's tags as clickable chips linking to the filtered
    /// article listing. The query parameter is percent-encoded.
    fn tags_as_html(&self) -> String {
        let chips: Vec<String> = self
            .tags
            .iter()
            .map(|tag| {
                format!(
                    "<div class=\"tag\" onclick=\"location.href='/articles.html?tag={}'\">\
                     <div class=\"tag-text\">{tag}</div></div>",
                    urlencoding::encode(tag)
                )
            })
            .collect();
        format!("<div class=\"tags\">\n{}\n</div>", chips.join("\n"))
    }

    /// Render the post's tags as OpenGraph article meta tags.
    fn tags_as_meta(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("<meta property=\"og:article:tag\" content=\"{tag}\"/>"))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
