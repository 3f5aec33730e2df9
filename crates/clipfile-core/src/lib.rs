//! clipfile Core - create files from clipboard text.
//!
//! This crate provides the create-from-clipboard command and its parts:
//! - File name inference from clipboard content
//! - Target directory resolution from editor/workspace state
//! - Collision handling and the write/open step
//! - CLI configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use clipfile_core::clipboard::parser::suggest_file_name;
//!
//! let suggestion = suggest_file_name("def foo():\n    pass", "new_file");
//! assert_eq!(suggestion.name, "new_file.py");
//! ```

pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub use clipboard::SystemClipboard;
pub use clipboard::parser::{Language, NameSource, SuggestedName, suggest_file_name};
pub use command::{CancelStage, CreateFileFromClipboard, CreateOptions, Host, Outcome};
pub use config::cli_config::{CliConfig, CliConfigError};
pub use error::{ClipfileError, Result};
pub use workspace::{DocumentLocation, LocalFileStore, TargetDirectory, TargetSource};
