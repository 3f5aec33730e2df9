//! Clipboard access and content sniffing.
//!
//! Provides cross-platform clipboard reading and file name inference
//! for clipboard-to-file creation.

pub mod parser;

use async_trait::async_trait;
use clipfile_abstraction::{ClipboardSource, HostError, HostResult};
use tracing::debug;

/// The system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSource for SystemClipboard {
    async fn read_text(&self) -> HostResult<String> {
        tokio::task::spawn_blocking(read_clipboard)
            .await
            .map_err(|e| HostError::Other(format!("Clipboard task failed: {}", e)))?
    }
}

/// Read text from system clipboard.
///
/// A clipboard holding nothing, or no text, reads as an empty string.
pub fn read_clipboard() -> HostResult<String> {
    use arboard::Clipboard;

    let mut clipboard = Clipboard::new()
        .map_err(|e| HostError::Clipboard(format!("Failed to initialize clipboard: {}", e)))?;

    match clipboard.get_text() {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => {
            debug!("Clipboard holds no text");
            Ok(String::new())
        }
        Err(e) => Err(HostError::Clipboard(format!("Failed to read from clipboard: {}", e))),
    }
}
