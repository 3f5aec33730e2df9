//! File operations for the create step: existence check, overwrite
//! confirmation, write and open.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use clipfile_abstraction::{
    ChoiceRequest, DocumentOpener, EntryKind, FileStore, HostError, HostResult, Prompter,
};
use tracing::debug;

/// Label of the single affirmative choice in the collision dialog.
pub const OVERWRITE_CHOICE: &str = "Overwrite";

/// File store backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

#[async_trait]
impl FileStore for LocalFileStore {
    async fn stat(&self, path: &Path) -> HostResult<Option<EntryKind>> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HostError::io(path, "stat", e)),
        }
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> HostResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| HostError::io(parent, "create directory", e))?;
        }
        tokio::fs::write(path, contents).await.map_err(|e| HostError::io(path, "write", e))
    }
}

/// Ask whether an existing `name` may be overwritten.
///
/// Only the explicit overwrite choice counts as consent; any other answer,
/// including dismissing the dialog, is a refusal.
pub async fn confirm_overwrite(prompter: &dyn Prompter, name: &str) -> HostResult<bool> {
    let request =
        ChoiceRequest::modal(format!("{} already exists. Overwrite it?", name), &[OVERWRITE_CHOICE]);
    let answer = prompter.choose(&request).await?;
    Ok(answer.as_deref() == Some(OVERWRITE_CHOICE))
}

/// Write `text` to `path` as UTF-8, creating or truncating it, then open it
/// when an opener is given.
pub async fn write_document(
    files: &dyn FileStore,
    opener: Option<&dyn DocumentOpener>,
    path: &Path,
    text: &str,
) -> HostResult<()> {
    files.write(path, text.as_bytes()).await?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote file");

    if let Some(opener) = opener {
        opener.open_and_show(path).await?;
    }
    Ok(())
}
