//! Configuration module for clipfile Core.

pub mod cli_config;

pub use cli_config::{CliConfig, CliConfigError, CliConfigResult};
