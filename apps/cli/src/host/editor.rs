//! Opening created files in the user's editor.

use std::path::Path;

use async_trait::async_trait;
use clipfile_abstraction::{DocumentOpener, HostError, HostResult};
use clipfile_core::CliConfig;
use colored::Colorize;
use tracing::debug;

/// Opens documents with an editor command line.
///
/// The command is split on whitespace and the file path appended, so
/// `code --wait` runs `code --wait <path>`.
pub struct EditorOpener {
    editor: Option<String>,
}

impl EditorOpener {
    pub fn new(editor: Option<String>) -> Self {
        Self { editor: editor.filter(|e| !e.trim().is_empty()) }
    }

    /// Editor from config (or `CLIPFILE_EDITOR`), then `$VISUAL`, then `$EDITOR`.
    pub fn from_config(config: &CliConfig) -> Self {
        let editor = config
            .editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok());
        Self::new(editor)
    }
}

#[async_trait]
impl DocumentOpener for EditorOpener {
    async fn open_and_show(&self, path: &Path) -> HostResult<()> {
        let Some(ref editor) = self.editor else {
            debug!("No editor configured; printing path");
            println!("  {}", path.display().to_string().cyan());
            return Ok(());
        };

        let mut parts = editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| HostError::Open("editor command is empty".to_string()))?;

        debug!(editor = %editor, path = %path.display(), "Launching editor");
        let status = tokio::process::Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .await
            .map_err(|e| HostError::Open(format!("launch {}: {}", program, e)))?;

        if !status.success() {
            return Err(HostError::Open(format!("{} exited with {}", program, status)));
        }
        Ok(())
    }
}
