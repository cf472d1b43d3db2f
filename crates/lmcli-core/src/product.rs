//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to tell the shared scaffolding core where
//! its templates live and how generated projects are named.

/// Configuration trait for a scaffolding product
///
/// Each product defines:
/// - Product identity (name, display name)
/// - Template store location and the current template version
/// - Naming conventions for generated tooling files
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used as the CLI command name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Base URL of the template store; templates resolve to
    /// `<base>/<version>.<name>.template`
    fn default_template_url(&self) -> &'static str;

    /// Template version this CLI generates projects from
    fn template_version(&self) -> &'static str;

    /// Prefix of the static-analysis project key (`<prefix>.<project>`)
    fn project_key_prefix(&self) -> &'static str;

    /// CLI description shown in the usage banner
    fn cli_description(&self) -> &'static str;
}
