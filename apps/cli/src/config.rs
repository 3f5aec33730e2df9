//! CLI configuration loading and merging.

use anyhow::Context;
use clipfile_core::CliConfig;

/// Load and merge CLI configuration.
///
/// Configuration precedence:
/// 1. CLI arguments (handled by clap)
/// 2. Environment variables (`CLIPFILE_*`)
/// 3. Local config file (./.clipfilerc)
/// 4. Global config file (~/.clipfile/config.toml)
/// 5. Defaults
pub fn load_config() -> anyhow::Result<CliConfig> {
    let config = CliConfig::discover_and_load();
    config.validate().context("Invalid clipfile configuration")?;
    Ok(config)
}
