//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mdblog static blog generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root containing the source tree and the config file
    #[arg(short, long, default_value = "./")]
    pub root: PathBuf,

    /// Config file name (default: mdblog.toml)
    #[arg(short = 'C', long, default_value = crate::config::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Deletes the output directory if there is one and rebuilds the site
    Build,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let cli = Cli::parse_from(["mdblog", "build"]);
        assert_eq!(cli.root, PathBuf::from("./"));
        assert_eq!(cli.config, PathBuf::from("mdblog.toml"));
        assert!(matches!(cli.command, Commands::Build));
    }

    #[test]
    fn test_root_and_config_overrides() {
        let cli = Cli::parse_from(["mdblog", "--root", "/site", "-C", "other.toml", "build"]);
        assert_eq!(cli.root, PathBuf::from("/site"));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["mdblog"]).is_err());
    }
}
