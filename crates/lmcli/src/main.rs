//! lmcli - Project scaffolding for LibMicro services

use clap::Parser;
use lmcli_core::commands::{self, Command};
use lmcli_core::error::{self, ScaffoldError};
use lmcli_core::runtime::ProcessRunner;
use lmcli_core::tui::ClackPrompter;
use lmcli_core::{Dispatch, ProductConfig, Scaffolder, TemplateFetcher};
use std::process::ExitCode;

/// Exit status for usage displays and fatal errors
const EXIT_FAILURE: u8 = 255;

/// LibMicro product configuration
#[derive(Clone)]
pub struct LibMicroConfig;

impl ProductConfig for LibMicroConfig {
    fn name(&self) -> &'static str {
        "lmcli"
    }

    fn display_name(&self) -> &'static str {
        "LibMicroCMD"
    }

    fn default_template_url(&self) -> &'static str {
        "https://raw.githubusercontent.com/mateuszmierzwinski/libmicro-templates/master"
    }

    fn template_version(&self) -> &'static str {
        lmcli_core::CURRENT_TEMPLATE_VERSION
    }

    fn project_key_prefix(&self) -> &'static str {
        "com.libmicro"
    }

    fn cli_description(&self) -> &'static str {
        "LibMicro Command Line Interface"
    }
}

#[derive(Parser, Debug)]
#[command(name = "lmcli")]
#[command(about = "LibMicro Command Line Interface")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Command token followed by its parameters (`cp`, `cs`, `?`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub argv: Vec<String>,
}

async fn run(
    config: &LibMicroConfig,
    command: Command,
    argv: &[String],
) -> Result<(), ScaffoldError> {
    let fetcher = TemplateFetcher::from_config(config)?;
    let mut scaffolder = Scaffolder::new(
        config.clone(),
        fetcher,
        ClackPrompter,
        ProcessRunner,
    );
    commands::execute(&mut scaffolder, command, argv).await
}

fn usage(config: &LibMicroConfig) -> ExitCode {
    println!("{}", commands::usage(config));
    ExitCode::from(EXIT_FAILURE)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = LibMicroConfig;
    let registry = commands::registry();

    let code = match registry.resolve(&args.argv) {
        Dispatch::Usage => usage(&config),
        Dispatch::Run { handler, args } => match run(&config, handler, args).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if e.is_usage() => usage(&config),
            Err(e) => {
                error::report(&e);
                ExitCode::from(EXIT_FAILURE)
            }
        },
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    code
}
