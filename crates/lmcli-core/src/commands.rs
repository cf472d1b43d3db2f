//! The LibMicro command set: `cp` and `cs`

use crate::config::generator::GIT_IGNORE_FILE;
use crate::dispatch::CommandRegistry;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::CommandRunner;
use crate::scaffold::Scaffolder;
use crate::tui::Prompter;

/// Handlers reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `cp <projectName>`
    CreateProject,
    /// `cs <projectName> <moduleName>`
    CreateService,
}

/// Parsed handler arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Project { name: String },
    Service { project: String, module: String },
}

impl Command {
    /// Parse the handler's arguments; `args[0]` is the command token
    pub fn parse(&self, args: &[String]) -> Result<Request> {
        let positional = args.get(1..).unwrap_or_default();
        match (self, positional) {
            (Command::CreateProject, [name, ..]) => Ok(Request::Project { name: name.clone() }),
            (Command::CreateService, [project, module, ..]) => Ok(Request::Service {
                project: project.clone(),
                module: module.clone(),
            }),
            (Command::CreateProject, _) => {
                Err(ScaffoldError::Usage("cp requires <projectName>".to_string()))
            }
            (Command::CreateService, _) => Err(ScaffoldError::Usage(
                "cs requires <projectName> <moduleName>".to_string(),
            )),
        }
    }
}

/// The registry used by the CLI
pub fn registry() -> CommandRegistry<Command> {
    CommandRegistry::new([
        ("cp", Command::CreateProject),
        ("cs", Command::CreateService),
    ])
}

/// Run `command` to completion
pub async fn execute<C, P, R>(
    scaffolder: &mut Scaffolder<C, P, R>,
    command: Command,
    args: &[String],
) -> Result<()>
where
    C: ProductConfig,
    P: Prompter,
    R: CommandRunner,
{
    let request = command.parse(args)?;
    cliclack::intro(scaffolder.config().display_name())?;

    match request {
        Request::Project { name } => {
            let dir = scaffolder.create_project(&name).await?;
            cliclack::outro(format!("Project {} created in {}", name, dir.display()))?;
        }
        Request::Service { project, module } => {
            scaffolder.create_module(&project, &module).await?;
            cliclack::outro(format!("Service provider {} for {}", module, project))?;
        }
    }

    Ok(())
}

/// Usage banner listing every command
pub fn usage<C: ProductConfig>(config: &C) -> String {
    let name = config.name();
    format!(
        "{display} {description}\n\
         Usage: {name} <command> <parameters>\n\
         \n  Commands:\n\
         \tcp <projectName>\t\t\t- creates a project\n\
         \tcs <projectName> <moduleName>\t- creates a service provider within project\n\
         \t?\t\t\t\t\t- displays this help message\n\
         \n\
         Note: created projects get a {ignore} that ignores vendor/, so vendored\n\
         modules are left out of the initial commit.\n",
        display = config.display_name(),
        description = config.cli_description(),
        name = name,
        ignore = GIT_IGNORE_FILE,
    )
}
