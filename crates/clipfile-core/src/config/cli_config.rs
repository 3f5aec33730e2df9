//! CLI configuration file support.
//!
//! Provides configuration structure and loading for CLI settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::clipboard::parser::DEFAULT_STEM;

/// Environment variable overriding `default_stem`.
pub const ENV_DEFAULT_STEM: &str = "CLIPFILE_DEFAULT_STEM";
/// Environment variable overriding `editor`.
pub const ENV_EDITOR: &str = "CLIPFILE_EDITOR";
/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "CLIPFILE_LOG_LEVEL";

/// CLI configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Stem for inferred file names (`new_file` when unset)
    #[serde(default)]
    pub default_stem: Option<String>,

    /// Command used to open created files
    #[serde(default)]
    pub editor: Option<String>,

    /// Open the created file afterwards (true when unset)
    #[serde(default)]
    pub open_after_create: Option<bool>,

    /// Workspace root folders, first one wins
    #[serde(default)]
    pub workspace_folders: Vec<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum CliConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations.
pub type CliConfigResult<T> = std::result::Result<T, CliConfigError>;

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> CliConfigResult<Self> {
        if !path.exists() {
            return Err(CliConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CliConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| CliConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Get default global configuration file path.
    pub fn default_global_path() -> PathBuf {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".clipfile")
            .join("config.toml")
    }

    /// Get default local configuration file path.
    pub fn default_local_path() -> PathBuf {
        PathBuf::from(".clipfilerc")
    }

    /// Discover and load configuration files.
    ///
    /// Loads configuration from:
    /// 1. Global config (~/.clipfile/config.toml)
    /// 2. Local config (./.clipfilerc)
    /// 3. `CLIPFILE_*` environment variables
    ///
    /// Later sources override earlier ones.
    pub fn discover_and_load() -> Self {
        let mut config =
            Self::load_layers(&[Self::default_global_path(), Self::default_local_path()]);
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load and merge the given files in order, skipping missing ones.
    ///
    /// Files that exist but cannot be read or parsed are skipped with a warning.
    pub fn load_layers(paths: &[PathBuf]) -> Self {
        let mut config = Self::default();

        for path in paths {
            match Self::load_from_file(path) {
                Ok(layer) => {
                    debug!(path = %path.display(), "Loaded configuration");
                    config.merge(&layer);
                }
                Err(CliConfigError::NotFound(_)) => {}
                Err(e) => warn!(error = %e, "Skipping configuration file"),
            }
        }

        config
    }

    /// Merge another configuration into this one.
    ///
    /// Values from `other` override values in `self` if they are set.
    pub fn merge(&mut self, other: &Self) {
        if let Some(ref stem) = other.default_stem {
            self.default_stem = Some(stem.clone());
        }
        if let Some(ref editor) = other.editor {
            self.editor = Some(editor.clone());
        }
        if let Some(open) = other.open_after_create {
            self.open_after_create = Some(open);
        }
        if !other.workspace_folders.is_empty() {
            self.workspace_folders = other.workspace_folders.clone();
        }
        if let Some(ref log_level) = other.log_level {
            self.log_level = Some(log_level.clone());
        }
    }

    /// Apply `CLIPFILE_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(stem) = lookup(ENV_DEFAULT_STEM) {
            self.default_stem = Some(stem);
        }
        if let Some(editor) = lookup(ENV_EDITOR) {
            self.editor = Some(editor);
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(log_level);
        }
    }

    /// Check values that cannot be expressed in the TOML schema.
    pub fn validate(&self) -> CliConfigResult<()> {
        if let Some(ref stem) = self.default_stem {
            if stem.trim().is_empty() {
                return Err(CliConfigError::InvalidValue("default_stem must not be empty".to_string()));
            }
            if stem.contains(['/', '\\']) {
                return Err(CliConfigError::InvalidValue(format!(
                    "default_stem must be a bare name, got '{}'",
                    stem
                )));
            }
        }
        Ok(())
    }

    /// Stem for inferred file names.
    pub fn default_stem(&self) -> &str {
        self.default_stem.as_deref().unwrap_or(DEFAULT_STEM)
    }

    /// Whether created files are opened afterwards.
    pub fn open_after_create(&self) -> bool {
        self.open_after_create.unwrap_or(true)
    }
}
