//! Target directory resolution.
//!
//! Picks the one directory a new file is written into, in priority order:
//! 1. the focused editor's local file directory,
//! 2. otherwise the first workspace root,
//! 3. overridden by the explorer selection when no editor is focused and
//!    the window has focus.

use std::fmt;
use std::path::{Path, PathBuf};

use clipfile_abstraction::{EntryKind, EnvironmentQuery, FileStore, HostError, HostResult};
use tracing::debug;

/// Which signal produced the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    ActiveFile,
    WorkspaceRoot,
    ExplorerDirectory,
    ExplorerFileParent,
}

impl fmt::Display for TargetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ActiveFile => "active file",
            Self::WorkspaceRoot => "workspace root",
            Self::ExplorerDirectory => "explorer directory",
            Self::ExplorerFileParent => "explorer file parent",
        };
        f.write_str(label)
    }
}

/// The directory chosen for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    pub path: PathBuf,
    pub source: TargetSource,
}

/// Resolve the target directory, or `None` if no rule applies.
///
/// # Errors
/// Returns a `HostError` if the explorer query fails, or if the selected
/// item cannot be inspected.
pub async fn resolve_target_directory(
    environment: &dyn EnvironmentQuery,
    files: &dyn FileStore,
) -> HostResult<Option<TargetDirectory>> {
    let mut target = if let Some(dir) = environment.active_file_directory() {
        Some(TargetDirectory { path: dir, source: TargetSource::ActiveFile })
    } else {
        environment
            .first_workspace_root()
            .map(|root| TargetDirectory { path: root, source: TargetSource::WorkspaceRoot })
    };

    if !environment.editor_focused() && environment.window_focused() {
        if let Some(selected) = environment.explorer_selection().await? {
            target = Some(from_selection(files, selected).await?);
        }
    }

    if let Some(ref target) = target {
        debug!(target = %target.path.display(), source = %target.source, "Resolved target directory");
    }
    Ok(target)
}

async fn from_selection(files: &dyn FileStore, selected: PathBuf) -> HostResult<TargetDirectory> {
    match files.stat(&selected).await? {
        Some(EntryKind::Directory) => {
            Ok(TargetDirectory { path: selected, source: TargetSource::ExplorerDirectory })
        }
        Some(EntryKind::File) => {
            let parent = selected.parent().map_or_else(|| selected.clone(), Path::to_path_buf);
            Ok(TargetDirectory { path: parent, source: TargetSource::ExplorerFileParent })
        }
        None => Err(HostError::io(
            &selected,
            "stat",
            std::io::Error::new(std::io::ErrorKind::NotFound, "selected item does not exist"),
        )),
    }
}
