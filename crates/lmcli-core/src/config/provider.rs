//! Configuration provider strategies offered to generated projects

use crate::error::{Result, ScaffoldError};
use crate::tui::Prompter;
use std::fmt;

/// How a generated service receives its runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigProvider {
    CommandLine,
    Environment,
    YamlFile,
}

impl ConfigProvider {
    /// All providers in menu order (ordinal 1..=N)
    pub const ALL: [ConfigProvider; 3] = [
        ConfigProvider::CommandLine,
        ConfigProvider::Environment,
        ConfigProvider::YamlFile,
    ];

    /// Menu label: identifier, delimiter, description
    pub fn label(&self) -> &'static str {
        match self {
            ConfigProvider::CommandLine => "cmdconfigprovider\t- Command line given parameters",
            ConfigProvider::Environment => {
                "envconfigprovider\t- Environment variables given parameters"
            }
            ConfigProvider::YamlFile => {
                "yamlconfigprovider\t- Yaml file given parameters (Configuration files)"
            }
        }
    }

    /// 1-based menu position
    pub fn ordinal(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn from_ordinal(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Identifier substituted into templates
    pub fn id(&self) -> &'static str {
        option_id(self.label())
    }
}

impl fmt::Display for ConfigProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Option identifier: the label text before its first `\t-`, trimmed
pub fn option_id(label: &str) -> &str {
    label.split("\t-").next().unwrap_or(label).trim()
}

/// Ask the user which configuration provider the project should use
pub fn select_config_provider<P: Prompter>(prompter: &mut P) -> Result<ConfigProvider> {
    let labels: Vec<&str> = ConfigProvider::ALL.iter().map(|p| p.label()).collect();
    let index = prompter.select("Select configuration provider", &labels)?;
    ConfigProvider::ALL
        .get(index)
        .copied()
        .ok_or(ScaffoldError::InvalidSelection {
            index: index + 1,
            count: labels.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert_eq!(ConfigProvider::CommandLine.id(), "cmdconfigprovider");
        assert_eq!(ConfigProvider::Environment.id(), "envconfigprovider");
        assert_eq!(ConfigProvider::YamlFile.id(), "yamlconfigprovider");
    }

    #[test]
    fn test_ordinals_round_trip() {
        for provider in ConfigProvider::ALL {
            assert_eq!(ConfigProvider::from_ordinal(provider.ordinal()), Some(provider));
        }
        assert_eq!(ConfigProvider::from_ordinal(0), None);
        assert_eq!(ConfigProvider::from_ordinal(4), None);
    }

    /// Answers every menu with a fixed index
    struct FixedChoice(usize);

    impl Prompter for FixedChoice {
        fn confirm(&mut self, _what: &str) -> Result<bool> {
            Ok(true)
        }

        fn select(&mut self, _title: &str, _options: &[&str]) -> Result<usize> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_select_maps_index_to_provider() {
        let provider = select_config_provider(&mut FixedChoice(2)).unwrap();
        assert_eq!(provider, ConfigProvider::YamlFile);
    }

    #[test]
    fn test_select_out_of_range_is_error() {
        let err = select_config_provider(&mut FixedChoice(3)).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::InvalidSelection { index: 4, count: 3 }
        ));
    }

    #[test]
    fn test_option_id_without_delimiter() {
        assert_eq!(option_id("  plain  "), "plain");
        assert_eq!(option_id("a - b\t- c"), "a - b");
    }
}
