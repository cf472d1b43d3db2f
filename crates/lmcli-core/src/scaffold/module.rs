//! Module (service provider) creation

use super::Scaffolder;
use crate::error::Result;
use crate::product::ProductConfig;
use crate::runtime::CommandRunner;
use crate::tui::Prompter;

/// Template for a service provider inside an existing project
pub const MODULE_TEMPLATE: &str = "provider.go";

impl<C, P, R> Scaffolder<C, P, R>
where
    C: ProductConfig,
    P: Prompter,
    R: CommandRunner,
{
    /// Fetch the service provider template and show it.
    ///
    /// Nothing is written and no tool runs yet; the template body is returned.
    pub async fn create_module(&mut self, project: &str, module: &str) -> Result<String> {
        let template = self
            .fetcher
            .fetch(self.config.template_version(), MODULE_TEMPLATE)
            .await?;
        let template = String::from_utf8_lossy(&template).into_owned();

        cliclack::log::info(format!(
            "Service provider template for {} in {}:\n{}",
            module, project, template
        ))?;

        Ok(template)
    }
}
