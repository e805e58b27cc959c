//! Centralized path resolution for the source and output trees.
//!
//! A single source of truth mapping the fixed set of logical directory roles
//! (source root, posts, assets, css, js, meta, templates, output root and its
//! mirrors) to concrete paths, so no stage joins directory names by hand.
//!
//! ```text
//! <root>/src                 <root>/dst
//!   ├── posts/*.md             ├── posts/*.html
//!   ├── *.md                   ├── *.html
//!   ├── assets/                ├── assets/
//!   ├── css/                   ├── css/
//!   ├── meta/                  ├── meta/
//!   └── templates/             └── js/
//! ```

use std::path::{Path, PathBuf};

/// Directory role names, identical between source and output trees.
pub const SRC_DIR_NAME: &str = "src";
pub const DST_DIR_NAME: &str = "dst";
pub const POSTS_DIR_NAME: &str = "posts";
pub const ASSETS_DIR_NAME: &str = "assets";
pub const META_DIR_NAME: &str = "meta";
pub const CSS_DIR_NAME: &str = "css";
pub const JS_DIR_NAME: &str = "js";
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Immutable logical-to-physical directory mapping for one build.
#[derive(Debug, Clone)]
pub struct PathLayout {
    /// Source tree.
    pub src_dir: PathBuf,
    pub src_posts_dir: PathBuf,
    pub src_assets_dir: PathBuf,
    pub src_meta_dir: PathBuf,
    pub src_css_dir: PathBuf,
    pub src_templates_dir: PathBuf,

    /// Output tree.
    pub dst_dir: PathBuf,
    pub dst_posts_dir: PathBuf,
    pub dst_assets_dir: PathBuf,
    pub dst_meta_dir: PathBuf,
    pub dst_css_dir: PathBuf,
    pub dst_js_dir: PathBuf,
}

impl PathLayout {
    /// Build the full mapping from a project root.
    pub fn new(root: &Path) -> Self {
        let src_dir = root.join(SRC_DIR_NAME);
        let dst_dir = root.join(DST_DIR_NAME);

        Self {
            src_posts_dir: src_dir.join(POSTS_DIR_NAME),
            src_assets_dir: src_dir.join(ASSETS_DIR_NAME),
            src_meta_dir: src_dir.join(META_DIR_NAME),
            src_css_dir: src_dir.join(CSS_DIR_NAME),
            src_templates_dir: src_dir.join(TEMPLATES_DIR_NAME),
            dst_posts_dir: dst_dir.join(POSTS_DIR_NAME),
            dst_assets_dir: dst_dir.join(ASSETS_DIR_NAME),
            dst_meta_dir: dst_dir.join(META_DIR_NAME),
            dst_css_dir: dst_dir.join(CSS_DIR_NAME),
            dst_js_dir: dst_dir.join(JS_DIR_NAME),
            src_dir,
            dst_dir,
        }
    }

    /// Path of a template file under the source templates directory.
    pub fn template(&self, name: &str) -> PathBuf {
        self.src_templates_dir.join(name)
    }

    /// Strip the output root from a path, producing a site-relative URL.
    ///
    /// ```ignore
    /// // dst_dir: /site/dst
    /// layout.site_relative(Path::new("/site/dst/posts/hello.html"))
    /// // → "posts/hello.html"
    /// ```
    ///
    /// Paths outside the output tree are returned unchanged, separators
    /// normalized to `/`.
    pub fn site_relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.dst_dir).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }

    /// Map a source file path to its output path: destination directory plus
    /// the source stem with a new extension.
    ///
    /// ```ignore
    /// src_to_dst_path(Path::new("src/posts/hello.md"), &dst_posts, "html")
    /// // → dst_posts/hello.html
    /// ```
    pub fn src_to_dst_path(src: &Path, dst_dir: &Path, ext: &str) -> PathBuf {
        let stem = src.file_stem().unwrap_or_default().to_string_lossy();
        dst_dir.join(format!("{stem}.{ext}"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PathLayout {
        PathLayout::new(Path::new("/site"))
    }

    #[test]
    fn test_source_tree() {
        let layout = layout();
        assert_eq!(layout.src_dir, PathBuf::from("/site/src"));
        assert_eq!(layout.src_posts_dir, PathBuf::from("/site/src/posts"));
        assert_eq!(layout.src_assets_dir, PathBuf::from("/site/src/assets"));
        assert_eq!(layout.src_css_dir, PathBuf::from("/site/src/css"));
        assert_eq!(layout.src_meta_dir, PathBuf::from("/site/src/meta"));
        assert_eq!(
            layout.src_templates_dir,
            PathBuf::from("/site/src/templates")
        );
    }

    #[test]
    fn test_output_tree() {
        let layout = layout();
        assert_eq!(layout.dst_dir, PathBuf::from("/site/dst"));
        assert_eq!(layout.dst_posts_dir, PathBuf::from("/site/dst/posts"));
        assert_eq!(layout.dst_js_dir, PathBuf::from("/site/dst/js"));
    }

    #[test]
    fn test_template_path() {
        let layout = layout();
        assert_eq!(
            layout.template("post.html.template"),
            PathBuf::from("/site/src/templates/post.html.template")
        );
    }

    #[test]
    fn test_site_relative_inside_output() {
        let layout = layout();
        assert_eq!(
            layout.site_relative(Path::new("/site/dst/posts/hello.html")),
            "posts/hello.html"
        );
        assert_eq!(
            layout.site_relative(Path::new("/site/dst/about.html")),
            "about.html"
        );
    }

    #[test]
    fn test_site_relative_outside_output() {
        let layout = layout();
        assert_eq!(
            layout.site_relative(Path::new("other/file.html")),
            "other/file.html"
        );
    }

    #[test]
    fn test_src_to_dst_path() {
        assert_eq!(
            PathLayout::src_to_dst_path(
                Path::new("/site/src/posts/hello.md"),
                Path::new("/site/dst/posts"),
                "html"
            ),
            PathBuf::from("/site/dst/posts/hello.html")
        );
    }

    #[test]
    fn test_src_to_dst_path_multi_dot_name() {
        // Only the final extension is replaced
        assert_eq!(
            PathLayout::src_to_dst_path(
                Path::new("src/posts/v1.2-notes.md"),
                Path::new("dst/posts"),
                "html"
            ),
            PathBuf::from("dst/posts/v1.2-notes.html")
        );
    }
}
