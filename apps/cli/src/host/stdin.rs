//! Standard input as a clipboard source.

use async_trait::async_trait;
use clipfile_abstraction::{ClipboardSource, HostError, HostResult};
use tokio::io::AsyncReadExt;

/// Reads the whole of standard input once.
pub struct StdinClipboard;

#[async_trait]
impl ClipboardSource for StdinClipboard {
    async fn read_text(&self) -> HostResult<String> {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|e| HostError::Clipboard(format!("Failed to read standard input: {}", e)))?;
        Ok(text)
    }
}
