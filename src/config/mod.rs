//! Blog configuration management for `mdblog.toml`.
//!
//! The config file carries a single `[blog]` section with the site-wide
//! values. Every key except `converter_command` is required; a missing file,
//! a missing section, or a missing key aborts the build before any output is
//! produced.
//!
//! # Example
//!
//! ```toml
//! [blog]
//! url = "https://blog.example.com/"
//! title = "My Blog"
//! description = "A personal blog"
//! author_name = "Alice"
//! author_email = "alice@example.com"
//! copyright = "2026 Alice"
//! post_ignore_prefix = "_"
//! theme = "dark"
//! theme_can_toggle = true
//! ```

mod error;

pub use error::ConfigError;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default name of the configuration file, looked up under the project root.
pub const CONFIG_FILE_NAME: &str = "mdblog.toml";

/// Top-level structure of `mdblog.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    blog: BlogConfig,
}

/// `[blog]` section - site-wide immutable values.
///
/// Loaded once at startup and read-only for the remainder of the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogConfig {
    /// Base URL for absolute links in pages, feed and sitemap.
    pub url: String,

    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Site description for SEO meta tags and the feed channel.
    pub description: String,

    /// Author name for post templates.
    pub author_name: String,

    /// Author email for page footers.
    pub author_email: String,

    /// Copyright notice for page footers.
    pub copyright: String,

    /// Filename prefix that excludes a post from the build.
    pub post_ignore_prefix: String,

    /// Theme name substituted into templates.
    pub theme: String,

    /// Whether pages render a theme toggle button.
    pub theme_can_toggle: bool,

    /// Markdown converter invocation; the source path is appended.
    #[serde(default = "default_converter_command")]
    pub converter_command: Vec<String>,
}

fn default_converter_command() -> Vec<String> {
    ["pandoc", "-f", "markdown", "-t", "html"]
        .map(String::from)
        .to_vec()
}

impl BlogConfig {
    /// Parse configuration from TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(file.blog)
    }

    /// Load configuration from file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
            .with_context(|| format!("Failed to load config from `{}`", path.display()))
    }

    /// Validate configuration before a build.
    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[blog].url must start with http:// or https://".into()
            ));
        }

        Self::check_command_installed("[blog].converter_command", &self.converter_command)?;

        Ok(())
    }

    /// Check if a command is installed and available.
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        if command.is_empty() {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        }

        let cmd = &command[0];
        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }
}

/// Fully-populated config for unit tests across the crate.
#[cfg(test)]
pub fn tests_config() -> BlogConfig {
    BlogConfig {
        url: "https://blog.example/".to_string(),
        title: "My Blog".to_string(),
        description: "A test blog".to_string(),
        author_name: "Alice".to_string(),
        author_email: "alice@example.com".to_string(),
        copyright: "2026 Alice".to_string(),
        post_ignore_prefix: "_".to_string(),
        theme: "dark".to_string(),
        theme_can_toggle: true,
        converter_command: vec!["cat".to_string()],
    }
}

// ============================================================================
// Tests
// ============================================================================
