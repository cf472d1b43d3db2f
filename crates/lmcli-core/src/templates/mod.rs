//! Template fetching and placeholder substitution
//!
//! This module provides:
//! - Template references and the HTTP fetcher for the remote template store
//! - Substitution of placeholder tokens inside fetched templates

pub mod fetcher;

pub use fetcher::{TemplateFetcher, TemplateRef};

/// Placeholder replaced by the selected configuration provider identifier
pub const CONFIG_PROVIDER_PLACEHOLDER: &str = "{{configProvider}}";

/// Replace the config provider placeholder with `provider_id`.
///
/// Everything outside the placeholder is left byte-for-byte untouched.
pub fn apply_config_provider(template: &str, provider_id: &str) -> String {
    template.replace(CONFIG_PROVIDER_PLACEHOLDER, provider_id)
}
