//! Create command implementation.
//!
//! Wires the terminal host into the create-from-clipboard command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clipfile_abstraction::ClipboardSource;
use clipfile_core::{
    CliConfig, CreateFileFromClipboard, CreateOptions, Host, LocalFileStore, Outcome,
    SystemClipboard,
};
use tracing::debug;

use crate::host::{CliEnvironment, ConsoleNotifier, EditorOpener, StdinClipboard, TerminalPrompter};

/// Arguments for the create command.
#[derive(Args, Debug, Default, Clone)]
pub struct CreateArgs {
    /// Document shown in the focused editor (path or URI, e.g. untitled:Untitled-1)
    #[arg(long, env = "CLIPFILE_ACTIVE_FILE", value_name = "PATH|URI")]
    pub active_file: Option<String>,

    /// Workspace root folder; repeat for multi-root workspaces (the first one is used)
    #[arg(long = "workspace-folder", value_name = "DIR")]
    pub workspace_folders: Vec<PathBuf>,

    /// Item selected in the file explorer (file or directory)
    #[arg(long, env = "CLIPFILE_SELECTED", value_name = "PATH")]
    pub selected: Option<PathBuf>,

    /// Read the text from standard input instead of the clipboard
    #[arg(long)]
    pub stdin: bool,

    /// Use this file name instead of asking
    #[arg(long)]
    pub name: Option<String>,

    /// Accept the suggested name and overwrite existing files without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Do not open the file after creating it
    #[arg(long)]
    pub no_open: bool,
}

/// Execute the create command.
///
/// Returns `false` when the invocation ended with a reported error.
pub async fn execute(args: CreateArgs, config: &CliConfig) -> Result<bool> {
    let environment =
        CliEnvironment::from_args(&args, config).context("Failed to determine the workspace")?;
    let clipboard: Box<dyn ClipboardSource> =
        if args.stdin { Box::new(StdinClipboard) } else { Box::new(SystemClipboard) };
    let prompter = TerminalPrompter::new(args.name.clone(), args.yes);
    let opener = EditorOpener::from_config(config);

    let host = Host {
        clipboard: clipboard.as_ref(),
        prompter: &prompter,
        notifier: &ConsoleNotifier,
        environment: &environment,
        files: &LocalFileStore,
        opener: &opener,
    };
    let options = CreateOptions {
        default_stem: config.default_stem().to_string(),
        open_after_create: config.open_after_create() && !args.no_open,
    };

    let outcome = CreateFileFromClipboard::new(host, options).execute().await;
    match &outcome {
        Some(Outcome::Created { path, .. }) => debug!(path = %path.display(), "Done"),
        Some(Outcome::Cancelled(stage)) => debug!(?stage, "Cancelled"),
        None => {}
    }
    Ok(outcome.is_some())
}
