//! Suggest command implementation.
//!
//! Prints the file name the create command would suggest.

use anyhow::{Context, Result};
use clap::Args;
use clipfile_abstraction::{ClipboardSource, NotificationLevel, Notifier};
use clipfile_core::{CliConfig, ClipfileError, SystemClipboard, suggest_file_name};
use tracing::debug;

use crate::host::{ConsoleNotifier, StdinClipboard};

/// Arguments for the suggest command.
#[derive(Args, Debug, Default, Clone)]
pub struct SuggestArgs {
    /// Read the text from standard input instead of the clipboard
    #[arg(long)]
    pub stdin: bool,

    /// Output the suggestion as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the suggest command.
pub async fn execute(args: &SuggestArgs, config: &CliConfig) -> Result<bool> {
    let clipboard: Box<dyn ClipboardSource> =
        if args.stdin { Box::new(StdinClipboard) } else { Box::new(SystemClipboard) };
    let text = clipboard.read_text().await.context("Failed to read from clipboard")?;

    if text.is_empty() {
        ConsoleNotifier.notify(NotificationLevel::Error, &ClipfileError::EmptyClipboard.user_message());
        return Ok(false);
    }

    let suggestion = suggest_file_name(&text, config.default_stem());
    debug!(source = %suggestion.source, "Suggested file name");

    if args.json {
        let output = serde_json::json!({
            "name": suggestion.name,
            "source": suggestion.source.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", suggestion.name);
    }

    Ok(true)
}
