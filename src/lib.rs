//! mdblog - a minimal markdown blog generator.
//!
//! Reads markdown posts and pages from a fixed source tree, validates post
//! headers, converts markdown through an external converter command and
//! renders everything through `${name}` placeholder templates into a static
//! output tree, together with an RSS feed, sitemap, robots.txt and a
//! client-side tag filter script.

pub mod build;
pub mod cli;
pub mod config;
pub mod converter;
pub mod generator;
pub mod logger;
pub mod page;
pub mod paths;
pub mod post;
pub mod rewrite;
pub mod tags;
pub mod template;
pub mod utils;

pub use build::BuildContext;
pub use config::BlogConfig;
pub use converter::{CommandConverter, MarkdownConverter};
pub use paths::PathLayout;
