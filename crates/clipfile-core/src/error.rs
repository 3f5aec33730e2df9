//! Error types for clipfile Core.

use clipfile_abstraction::HostError;
use thiserror::Error;

/// Core error type for the create-from-clipboard command.
#[derive(Error, Debug)]
pub enum ClipfileError {
    /// The clipboard held no text.
    #[error("Clipboard has no text")]
    EmptyClipboard,

    /// No rule produced a directory to write into.
    #[error("Cannot determine where to create the file")]
    NoTargetDirectory,

    /// A host service failed (clipboard, prompt, stat, write, open).
    #[error(transparent)]
    Host(#[from] HostError),
}

impl ClipfileError {
    /// Text shown to the user when this error ends an invocation.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyClipboard | Self::NoTargetDirectory => self.to_string(),
            Self::Host(err) => format!("An error occurred: {}", err),
        }
    }
}

/// Result type alias for clipfile operations.
pub type Result<T> = std::result::Result<T, ClipfileError>;
