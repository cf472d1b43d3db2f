//! Project creation: template to a built, optionally versioned Go module

use super::{best_effort, Scaffolder};
use crate::config::generator::{self, GIT_IGNORE_FILE, SONAR_PROPERTIES_FILE};
use crate::config::select_config_provider;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::{CommandRunner, GIT, GO};
use crate::templates::apply_config_provider;
use crate::tui::Prompter;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Template holding the generated entry point
pub const PROJECT_TEMPLATE: &str = "main.go";

/// Entry-point file written into the project directory
pub const ENTRY_FILE: &str = "main.go";

/// Throwaway binary produced by the build check
pub const BUILD_ARTIFACT: &str = ".testexec";

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

impl<C, P, R> Scaffolder<C, P, R>
where
    C: ProductConfig,
    P: Prompter,
    R: CommandRunner,
{
    /// Create a new project named `name` and return its directory.
    pub async fn create_project(&mut self, name: &str) -> Result<PathBuf> {
        let template = self
            .fetcher
            .fetch(self.config.template_version(), PROJECT_TEMPLATE)
            .await?;
        let template = String::from_utf8_lossy(&template);

        let provider = select_config_provider(&mut self.prompter)?;
        let content = apply_config_provider(&template, provider.id());

        let project_dir = self.base_dir()?.join(name);
        cliclack::log::info(format!("Project directory will be: {}", project_dir.display()))?;
        fs::create_dir_all(&project_dir)
            .await
            .map_err(|source| ScaffoldError::CreateDir {
                path: project_dir.clone(),
                source,
            })?;

        write_file(&project_dir.join(ENTRY_FILE), content.as_bytes()).await?;

        cliclack::log::step("Initializing Go Modules")?;
        self.run_tool(GO.invocation(&project_dir, ["mod", "init", name])).await?;

        cliclack::log::step("Pulling Go Modules")?;
        self.run_tool(GO.invocation(&project_dir, ["mod", "tidy"])).await?;

        if self.prompter.confirm("Vendoring Go Modules")? {
            cliclack::log::step("Vendoring Go Modules")?;
            self.run_tool(GO.invocation(&project_dir, ["mod", "vendor"])).await?;
        }

        self.verify_build(&project_dir).await?;

        if self.prompter.confirm("SonarQube Scanner integration")? {
            cliclack::log::step(format!("Adding {} file", SONAR_PROPERTIES_FILE))?;
            let properties = generator::sonar_properties(self.config.project_key_prefix(), name);
            write_file(&project_dir.join(SONAR_PROPERTIES_FILE), properties.as_bytes()).await?;
        }

        if self.prompter.confirm("Initialize GIT repository")? {
            self.init_repository(&project_dir).await?;
        }

        cliclack::log::success("OK ;). Ready.")?;

        if self.reveal_project {
            best_effort(
                "Opening project directory",
                open::that_detached(&project_dir),
            );
        }

        Ok(project_dir)
    }

    /// Build once to prove the generated module compiles, then drop the binary
    async fn verify_build(&self, project_dir: &Path) -> Result<()> {
        cliclack::log::step("Trying to build")?;
        self.run_tool(GO.invocation(project_dir, ["build", "-o", BUILD_ARTIFACT, "."]))
            .await?;

        best_effort(
            "Removing build artifact",
            fs::remove_file(project_dir.join(BUILD_ARTIFACT)).await,
        );
        cliclack::log::success(";) Build successful")?;
        Ok(())
    }

    async fn init_repository(&mut self, project_dir: &Path) -> Result<()> {
        cliclack::log::step("Initializing GIT repository")?;
        self.run_tool(GIT.invocation(project_dir, ["init"])).await?;

        cliclack::log::step("Adding GIT ignore file")?;
        best_effort(
            "Writing ignore file",
            fs::write(project_dir.join(GIT_IGNORE_FILE), generator::git_ignore()).await,
        );

        if self.prompter.confirm("First initial Git commit")? {
            cliclack::log::step("Making GIT initial commit")?;
            self.run_tool(GIT.invocation(project_dir, ["add", "--all"])).await?;
            self.run_tool(GIT.invocation(project_dir, ["commit", "-m", INITIAL_COMMIT_MESSAGE]))
                .await?;
        }

        Ok(())
    }
}

async fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content)
        .await
        .map_err(|source| ScaffoldError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
}
