//! The create-file-from-clipboard command.
//!
//! One invocation is a fixed sequence of awaited steps:
//! 1. read the clipboard (empty text ends the invocation with an error),
//! 2. suggest a file name from the content,
//! 3. let the user confirm or edit the name,
//! 4. resolve the target directory,
//! 5. confirm overwriting an existing file,
//! 6. write, open and notify.
//!
//! A prompt that yields no value ends the invocation silently.

use std::path::PathBuf;

use clipfile_abstraction::{
    ClipboardSource, DocumentOpener, EnvironmentQuery, FileStore, InputRequest,
    NotificationLevel, Notifier, Prompter,
};
use tracing::{debug, info, warn};

use crate::clipboard::parser::{DEFAULT_STEM, suggest_file_name};
use crate::error::{ClipfileError, Result};
use crate::workspace::{confirm_overwrite, join_file_name, resolve_target_directory, write_document};

/// Prompt text for the file name input.
pub const NAME_PROMPT: &str = "Enter a file name";

/// Host services the command runs against.
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub clipboard: &'a dyn ClipboardSource,
    pub prompter: &'a dyn Prompter,
    pub notifier: &'a dyn Notifier,
    pub environment: &'a dyn EnvironmentQuery,
    pub files: &'a dyn FileStore,
    pub opener: &'a dyn DocumentOpener,
}

/// Per-invocation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    /// Stem for inferred names.
    pub default_stem: String,
    /// Open the file after writing it.
    pub open_after_create: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self { default_stem: DEFAULT_STEM.to_string(), open_after_create: true }
    }
}

/// Step at which the user cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelStage {
    NamePrompt,
    Overwrite,
}

/// How a completed invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { path: PathBuf, name: String },
    Cancelled(CancelStage),
}

/// The create-file-from-clipboard command bound to a host.
pub struct CreateFileFromClipboard<'a> {
    host: Host<'a>,
    options: CreateOptions,
}

impl<'a> CreateFileFromClipboard<'a> {
    pub fn new(host: Host<'a>, options: CreateOptions) -> Self {
        Self { host, options }
    }

    /// Run the command and report failures to the user.
    ///
    /// Returns `None` when the invocation failed; the failure has already
    /// been shown through the notifier.
    pub async fn execute(&self) -> Option<Outcome> {
        match self.run().await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                warn!(error = %err, "Create from clipboard failed");
                self.host.notifier.notify(NotificationLevel::Error, &err.user_message());
                None
            }
        }
    }

    /// Run the command, returning errors to the caller.
    pub async fn run(&self) -> Result<Outcome> {
        let host = self.host;

        let text = host.clipboard.read_text().await?;
        if text.is_empty() {
            return Err(ClipfileError::EmptyClipboard);
        }

        let suggestion = suggest_file_name(&text, &self.options.default_stem);
        debug!(name = %suggestion.name, source = %suggestion.source, "Suggested file name");

        let Some(name) = self.confirm_name(&suggestion.name).await? else {
            debug!("Name prompt dismissed");
            return Ok(Outcome::Cancelled(CancelStage::NamePrompt));
        };

        let target = resolve_target_directory(host.environment, host.files)
            .await?
            .ok_or(ClipfileError::NoTargetDirectory)?;
        let path = join_file_name(&target.path, &name);

        if host.files.stat(&path).await?.is_some() && !confirm_overwrite(host.prompter, &name).await? {
            debug!(path = %path.display(), "Overwrite declined");
            return Ok(Outcome::Cancelled(CancelStage::Overwrite));
        }

        let opener = self.options.open_after_create.then_some(host.opener);
        write_document(host.files, opener, &path, &text).await?;

        info!(path = %path.display(), "Created file from clipboard");
        host.notifier.notify(NotificationLevel::Info, &format!("Created {}", name));
        Ok(Outcome::Created { path, name })
    }

    async fn confirm_name(&self, suggested: &str) -> Result<Option<String>> {
        let request = InputRequest::new(NAME_PROMPT, suggested);
        let answer = self.host.prompter.input(&request).await?;
        Ok(answer.filter(|name| !name.is_empty()))
    }
}
