//! Scaffolding pipeline
//!
//! A [`Scaffolder`] owns every collaborator a command run needs: the template
//! fetcher, the prompter and the tool runner. Steps run strictly in order and
//! the first fatal failure is returned to the caller as-is. Nothing already
//! written to disk is rolled back.

mod module;
mod project;

pub use project::{BUILD_ARTIFACT, ENTRY_FILE, PROJECT_TEMPLATE};
pub use module::MODULE_TEMPLATE;

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::{CommandRunner, Invocation};
use crate::templates::TemplateFetcher;
use crate::tui::Prompter;
use std::fmt::Display;
use std::path::PathBuf;

/// Drives project and module creation
pub struct Scaffolder<C, P, R> {
    config: C,
    fetcher: TemplateFetcher,
    prompter: P,
    runner: R,
    base_dir: Option<PathBuf>,
    reveal_project: bool,
}

impl<C, P, R> Scaffolder<C, P, R>
where
    C: ProductConfig,
    P: Prompter,
    R: CommandRunner,
{
    pub fn new(config: C, fetcher: TemplateFetcher, prompter: P, runner: R) -> Self {
        Self {
            config,
            fetcher,
            prompter,
            runner,
            base_dir: None,
            reveal_project: true,
        }
    }

    /// Create projects under `dir` instead of the process working directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Whether to open the finished project in the platform file browser
    pub fn reveal_project(mut self, reveal: bool) -> Self {
        self.reveal_project = reveal;
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn base_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(ScaffoldError::WorkingDir),
        }
    }

    async fn run_tool(&self, invocation: Invocation) -> Result<()> {
        self.runner.run(&invocation).await
    }
}

/// Log a failed cosmetic step and carry on
fn best_effort<E: Display>(what: &str, result: std::result::Result<(), E>) {
    if let Err(e) = result {
        let _ = cliclack::log::remark(format!("{} skipped: {}", what, e));
    }
}
