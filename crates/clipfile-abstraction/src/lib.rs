//! Host abstraction layer for clipfile.
//!
//! This module defines the traits and types for the services the
//! create-from-clipboard command calls into: clipboard, prompts,
//! notifications, editor/workspace state, file storage and document display.
//! Implementations live in the host (the CLI binary, or an editor plugin);
//! tests drive the command with in-memory fakes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an error raised by a host service.
#[derive(Error, Debug)]
pub enum HostError {
    /// The clipboard could not be accessed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A prompt failed while waiting for the user.
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The host has no way to ask the user (e.g. no terminal attached).
    #[error("Prompt unavailable: {0}")]
    PromptUnavailable(String),

    /// A file-system operation failed.
    #[error("I/O error on {path} during {operation}: {source}")]
    Io {
        /// Path the operation targeted.
        path: String,
        /// Name of the operation (stat, write, ...).
        operation: String,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The document could not be opened or shown.
    #[error("Failed to open document: {0}")]
    Open(String),

    /// Other unexpected host errors.
    #[error("{0}")]
    Other(String),
}

impl HostError {
    /// Wraps an I/O failure with the path and operation it belongs to.
    pub fn io(path: &Path, operation: &str, source: std::io::Error) -> Self {
        Self::Io { path: path.display().to_string(), operation: operation.to_string(), source }
    }
}

/// Result type alias for host services.
pub type HostResult<T> = Result<T, HostError>;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Informational message (e.g. "Created foo.py").
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

/// Kind of an existing file-system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory).
    File,
    /// Directory.
    Directory,
}

/// Request for a single-line, editable text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    /// Prompt shown next to the input.
    pub prompt: String,
    /// Value the input is pre-filled with.
    pub value: String,
}

impl InputRequest {
    /// Creates a request with a pre-filled value.
    pub fn new(prompt: impl Into<String>, value: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), value: value.into() }
    }
}

/// Request for a confirmation dialog offering one or more explicit choices.
///
/// Dismissing the dialog is always possible and is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRequest {
    /// Message shown in the dialog.
    pub message: String,
    /// Choices offered, in display order.
    pub choices: Vec<String>,
    /// Whether the dialog blocks until answered.
    pub modal: bool,
}

impl ChoiceRequest {
    /// Creates a modal dialog with the given choices.
    pub fn modal(message: impl Into<String>, choices: &[&str]) -> Self {
        Self {
            message: message.into(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            modal: true,
        }
    }
}

/// Source of clipboard text.
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Reads the current clipboard text.
    ///
    /// An empty clipboard, or one holding no text, yields an empty string.
    ///
    /// # Errors
    /// Returns a `HostError` if the clipboard cannot be accessed at all.
    async fn read_text(&self) -> HostResult<String>;
}

/// Interactive prompts.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Shows an editable text input and waits for the user.
    ///
    /// Returns `None` when the user dismisses the input.
    ///
    /// # Errors
    /// Returns a `HostError` if the prompt cannot be shown.
    async fn input(&self, request: &InputRequest) -> HostResult<Option<String>>;

    /// Shows a dialog and returns the label of the chosen entry.
    ///
    /// Returns `None` when the user dismisses the dialog.
    ///
    /// # Errors
    /// Returns a `HostError` if the dialog cannot be shown.
    async fn choose(&self, request: &ChoiceRequest) -> HostResult<Option<String>>;
}

/// Transient user-visible messages.
pub trait Notifier: Send + Sync {
    /// Shows a message at the given level.
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Read-only view of the host's editor and workspace state.
#[async_trait]
pub trait EnvironmentQuery: Send + Sync {
    /// Whether an editor currently has focus, whatever document it shows.
    fn editor_focused(&self) -> bool;

    /// Whether the application window itself has input focus.
    fn window_focused(&self) -> bool;

    /// Directory of the focused editor's document, if that document is
    /// backed by local storage.
    fn active_file_directory(&self) -> Option<PathBuf>;

    /// First root folder of the open workspace.
    fn first_workspace_root(&self) -> Option<PathBuf>;

    /// Item currently selected in the file explorer.
    ///
    /// # Errors
    /// Returns a `HostError` if the explorer cannot be queried.
    async fn explorer_selection(&self) -> HostResult<Option<PathBuf>>;
}

/// File storage used for the collision check and the write.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Looks up the entry at `path`.
    ///
    /// Returns `Ok(None)` when nothing exists there.
    ///
    /// # Errors
    /// Returns a `HostError` for any failure other than "not found".
    async fn stat(&self, path: &Path) -> HostResult<Option<EntryKind>>;

    /// Writes `contents` to `path`, creating or truncating the file.
    ///
    /// # Errors
    /// Returns a `HostError` if the write fails.
    async fn write(&self, path: &Path, contents: &[u8]) -> HostResult<()>;
}

/// Opens documents in the editor.
#[async_trait]
pub trait DocumentOpener: Send + Sync {
    /// Opens the file at `path` as a document and brings it into view.
    ///
    /// # Errors
    /// Returns a `HostError` if the document cannot be opened or shown.
    async fn open_and_show(&self, path: &Path) -> HostResult<()>;
}
