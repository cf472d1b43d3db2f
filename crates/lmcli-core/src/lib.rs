//! LibMicro CLI Core - project scaffolding from remote templates
//!
//! This library implements everything behind the `lmcli` binary: command
//! dispatch, template fetching, interactive prompts, external tool execution
//! and the scaffolding pipeline that ties them together.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Collaborators** - `templates` (HTTP fetch, substitution),
//!   `runtime` (tool runner), `tui` (prompts), `config` (provider choices and
//!   generated tooling files)
//! - **Layer 2: Pipeline** - `Scaffolder`, driving project and module creation
//! - **Layer 3: Commands** - the token registry and the `cp`/`cs` handlers
//!
//! Every fallible step returns [`ScaffoldError`]; only the binary turns an
//! error into a diagnostic and a process exit.
//!
//! # Example Usage
//!
//! ```ignore
//! use lmcli_core::{commands, runtime::ProcessRunner, templates::TemplateFetcher};
//! use lmcli_core::{tui::ClackPrompter, Scaffolder};
//!
//! let fetcher = TemplateFetcher::from_config(&MyConfig)?;
//! let mut scaffolder = Scaffolder::new(MyConfig, fetcher, ClackPrompter, ProcessRunner);
//! scaffolder.create_project("demo").await?;
//! ```

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;
pub mod tui;

// Re-export main types for convenience
pub use config::ConfigProvider;
pub use dispatch::{CommandRegistry, Dispatch};
pub use error::{Result, ScaffoldError};
pub use product::ProductConfig;
pub use runtime::{CommandRunner, Invocation, ProcessRunner};
pub use scaffold::Scaffolder;
pub use templates::{TemplateFetcher, TemplateRef};

/// Template version generated projects are built from
pub const CURRENT_TEMPLATE_VERSION: &str = "v1";
