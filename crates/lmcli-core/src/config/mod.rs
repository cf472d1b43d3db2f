//! Project configuration choices and generated tooling files

pub mod generator;
pub mod provider;

pub use provider::{select_config_provider, ConfigProvider};
