//! External tool invocation
//!
//! Tools like the Go toolchain and git are treated as black boxes: they are
//! run to completion in a working directory with the inherited environment,
//! their output is captured, and a non-zero exit is an error.

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::process::Command as TokioCommand;

/// Configuration for a CLI tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "go")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
}

impl ToolConfig {
    /// Describe a run of this tool in `working_dir`
    pub fn invocation<I, S>(&self, working_dir: &Path, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: self.name.to_string(),
            label: self.display_name.to_string(),
            working_dir: working_dir.to_path_buf(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Go toolchain
pub const GO: ToolConfig = ToolConfig {
    name: "go",
    display_name: "GO Compiler",
};

/// Git
pub const GIT: ToolConfig = ToolConfig {
    name: "git",
    display_name: "Git Tool",
};

/// A single run of an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub label: String,
    pub working_dir: PathBuf,
    pub args: Vec<String>,
}

/// Runs tool invocations to completion, one at a time
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation).await
    }
}

/// Runner backed by real child processes.
///
/// Output is captured into memory and discarded on success; on failure both
/// streams travel with the returned [`ScaffoldError::ToolFailed`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        let output = TokioCommand::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .output()
            .await
            .map_err(|source| ScaffoldError::Spawn {
                label: invocation.label.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(ScaffoldError::ToolFailed {
            label: invocation.label.clone(),
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
