//! Error taxonomy for the scaffolding pipeline
//!
//! Every fallible step returns a [`ScaffoldError`] to a single top-level caller,
//! which decides how to render it (see [`report`]) and ends the process.

use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Convenience alias used throughout the crate
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Everything that can abort a command run
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Missing or malformed command arguments
    #[error("{0}")]
    Usage(String),

    #[error("Invalid template URL: {0}")]
    InvalidTemplateUrl(String),

    #[error("Failed to fetch template from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Status code is not 200! Is: {status} ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read template body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Cannot get working directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create project content {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch {label}: {source}")]
    Spawn {
        label: String,
        #[source]
        source: io::Error,
    },

    /// A tool ran but exited unsuccessfully; both captured streams are kept
    #[error("{label} failed ({status})")]
    ToolFailed {
        label: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("Input closed before a selection was made")]
    InputClosed,

    #[error("Selection {index} is out of range (1..={count})")]
    InvalidSelection { index: usize, count: usize },

    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),
}

impl ScaffoldError {
    pub fn is_usage(&self) -> bool {
        matches!(self, ScaffoldError::Usage(_))
    }
}

/// Render a fatal error to the console.
///
/// Tool failures dump the captured stdout and stderr in two labeled blocks.
/// Usage errors are left to the caller, which shows the usage text instead.
pub fn report(err: &ScaffoldError) {
    match err {
        ScaffoldError::ToolFailed {
            label,
            stdout,
            stderr,
            ..
        } => {
            println!(
                "{}",
                format!("--------- [ ERROR Executing {} ] ----------", label).red()
            );
            println!("{}", stdout);
            println!(
                "{}",
                format!("-------- [ ERROR Output from {} ] ---------", label).red()
            );
            println!("{}", stderr);
        }
        ScaffoldError::Usage(_) => {}
        other => println!("{} {}", "Error:".red().bold(), other),
    }
}
