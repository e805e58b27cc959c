//! External markdown conversion.
//!
//! The pipeline treats markdown→HTML conversion as a black box behind the
//! [`MarkdownConverter`] trait: a source file path goes in, HTML text comes
//! out, or a distinguishable failure. The production implementation shells
//! out to an external converter (pandoc by default); tests supply a double.

use std::{
    path::{Path, PathBuf},
    process::Command,
};
use thiserror::Error;

/// Markdown conversion errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to execute `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` failed on `{path}` with {status}\n{stderr}")]
    Failed {
        program: String,
        path: PathBuf,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("`{program}` produced non-UTF-8 output for `{path}`")]
    InvalidOutput { program: String, path: PathBuf },

    #[error("empty converter command")]
    EmptyCommand,
}

/// Capability for converting a markdown source file to HTML.
pub trait MarkdownConverter {
    /// Convert the file at `path` to an HTML string.
    fn convert(&self, path: &Path) -> Result<String, ConvertError>;
}

/// Converter that invokes an external command with the source path appended.
///
/// The command is taken from `[blog].converter_command`, e.g.
/// `["pandoc", "-f", "markdown", "-t", "html"]`; the converted HTML is read
/// from its stdout.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    command: Vec<String>,
}

impl CommandConverter {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn program(&self) -> Result<&str, ConvertError> {
        self.command
            .first()
            .map(String::as_str)
            .ok_or(ConvertError::EmptyCommand)
    }
}

impl MarkdownConverter for CommandConverter {
    fn convert(&self, path: &Path) -> Result<String, ConvertError> {
        let program = self.program()?.to_owned();

        let output = Command::new(&self.command[0])
            .args(&self.command[1..])
            .arg(path)
            .output()
            .map_err(|source| ConvertError::Launch {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                program,
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ConvertError::InvalidOutput {
            program,
            path: path.to_path_buf(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
