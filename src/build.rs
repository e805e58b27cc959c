//! Build orchestration.
//!
//! [`BuildContext`] drives one full site generation as a fixed sequence of
//! stages over a shared post collection: clean the output tree, recreate its
//! directories, copy static files, process posts and pages, then emit the
//! tag script, feed, favicon, manifest, sitemap and robots.txt. Stages run
//! strictly in order; any stage error aborts the build with the output tree
//! left as-is.

use crate::{
    config::BlogConfig,
    converter::MarkdownConverter,
    generator::{robots, rss::RssFeed, scripts, sitemap::Sitemap},
    log,
    page::{ArticlesPage, Page, TagsPage},
    paths::PathLayout,
    post::Post,
    utils::fs::{copy_dir_files, copy_if_present},
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

const POST_TEMPLATE: &str = "post.html.template";
const PAGE_TEMPLATE: &str = "page.html.template";

/// State for one site generation.
pub struct BuildContext<'a> {
    config: &'a BlogConfig,
    paths: &'a PathLayout,
    converter: &'a dyn MarkdownConverter,

    /// Validated posts in processing order, shared by the later stages.
    pub posts: Vec<Post>,
    pub processed_posts: usize,
    pub skipped_posts: usize,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        config: &'a BlogConfig,
        paths: &'a PathLayout,
        converter: &'a dyn MarkdownConverter,
    ) -> Self {
        Self {
            config,
            paths,
            converter,
            posts: Vec::new(),
            processed_posts: 0,
            skipped_posts: 0,
        }
    }

    /// Run all build stages in order.
    pub fn run(&mut self) -> Result<()> {
        self.clean_output_tree()?;
        self.create_output_tree()?;
        self.copy_static_files()?;

        log!("posts"; "processing posts...");
        self.process_posts()?;

        log!("pages"; "processing pages...");
        self.process_pages()?;

        log!("scripts"; "generating tag script...");
        scripts::write(self.config, self.paths, &self.posts)?;

        log!("feed"; "generating rss feed...");
        RssFeed::new(self.config, &self.posts).write(self.paths)?;

        self.copy_favicon()?;
        self.copy_manifest()?;

        log!("sitemap"; "generating sitemap...");
        Sitemap::new(self.config, &self.posts).write(self.paths)?;

        log!("robots"; "generating robots.txt...");
        robots::write(self.config, self.paths)?;

        log!(
            "build";
            "done: {} posts processed, {} skipped",
            self.processed_posts,
            self.skipped_posts
        );
        Ok(())
    }

    /// Remove the output tree. A missing tree is fine.
    fn clean_output_tree(&self) -> Result<()> {
        if self.paths.dst_dir.exists() {
            fs::remove_dir_all(&self.paths.dst_dir).with_context(|| {
                format!(
                    "Failed to remove output directory `{}`",
                    self.paths.dst_dir.display()
                )
            })?;
        }
        Ok(())
    }

    fn create_output_tree(&self) -> Result<()> {
        let directories = [
            &self.paths.dst_dir,
            &self.paths.dst_posts_dir,
            &self.paths.dst_css_dir,
            &self.paths.dst_assets_dir,
            &self.paths.dst_meta_dir,
            &self.paths.dst_js_dir,
        ];
        for directory in directories {
            fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create directory `{}`", directory.display())
            })?;
        }
        Ok(())
    }

    /// Copy css, meta and asset files into the output tree.
    fn copy_static_files(&self) -> Result<()> {
        copy_dir_files(&self.paths.src_css_dir, &self.paths.dst_css_dir)?;
        copy_dir_files(&self.paths.src_meta_dir, &self.paths.dst_meta_dir)?;
        copy_dir_files(&self.paths.src_assets_dir, &self.paths.dst_assets_dir)?;
        Ok(())
    }

    /// Markdown files directly inside `dir`, in name order.
    fn markdown_sources(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect()
    }

    /// Validate, convert, render and write every post source.
    ///
    /// Sources whose file name starts with the ignore prefix are skipped
    /// with a warning; an invalid header aborts the build.
    fn process_posts(&mut self) -> Result<()> {
        let post_template = self.read_template(POST_TEMPLATE)?;

        for src_path in self.markdown_sources(&self.paths.src_posts_dir) {
            let file_name = src_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            if !self.config.post_ignore_prefix.is_empty()
                && file_name.starts_with(&self.config.post_ignore_prefix)
            {
                log!("skip"; "skipping {}", src_path.display());
                self.skipped_posts += 1;
                continue;
            }

            log!("posts"; "processing {}", src_path.display());
            let mut post = Post::load(self.paths, &src_path)?;
            post.convert(self.converter)?;

            let html = post.render(&post_template, self.config, self.paths)?;
            fs::write(&post.dst_path, html).with_context(|| {
                format!("Failed to write post to `{}`", post.dst_path.display())
            })?;

            self.processed_posts += 1;
            self.posts.push(post);
        }

        Ok(())
    }

    /// Convert, render and write every top-level page source.
    ///
    /// `articles.md` and `tags.md` get the listing and tag-cloud fragments
    /// appended; every other page renders its body verbatim.
    fn process_pages(&self) -> Result<()> {
        let page_template = self.read_template(PAGE_TEMPLATE)?;

        for src_path in self.markdown_sources(&self.paths.src_dir) {
            log!("pages"; "processing {}", src_path.display());

            let mut page = Page::load(self.paths, &src_path);
            page.convert(self.converter)?;

            let file_name = src_path.file_name().unwrap_or_default();
            let html = if file_name == "articles.md" {
                ArticlesPage::new(page.clone(), &self.posts).render(
                    &page_template,
                    self.config,
                    self.paths,
                )?
            } else if file_name == "tags.md" {
                TagsPage::new(page.clone(), &self.posts).render(
                    &page_template,
                    self.config,
                    self.paths,
                )?
            } else {
                page.render(&page_template, self.config, self.paths)?
            };

            fs::write(&page.dst_path, html).with_context(|| {
                format!("Failed to write page to `{}`", page.dst_path.display())
            })?;
        }

        Ok(())
    }

    /// Place `favicon.ico` at the output root, if the source has one.
    fn copy_favicon(&self) -> Result<()> {
        let src = self.paths.src_meta_dir.join("favicon.ico");
        let dst = self.paths.dst_dir.join("favicon.ico");
        if copy_if_present(&src, &dst)? {
            log!("meta"; "copied favicon.ico");
        }
        Ok(())
    }

    /// Place `site.webmanifest` at the output root, if the copied assets
    /// include one.
    fn copy_manifest(&self) -> Result<()> {
        let src = self.paths.dst_assets_dir.join("site.webmanifest");
        let dst = self.paths.dst_dir.join("site.webmanifest");
        if copy_if_present(&src, &dst)? {
            log!("meta"; "copied site.webmanifest");
        }
        Ok(())
    }

    fn read_template(&self, name: &str) -> Result<String> {
        let path = self.paths.template(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template `{}`", path.display()))
    }
}
