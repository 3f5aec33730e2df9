//! Editor and workspace state as seen from the command line.
//!
//! An editor integration passes the focused document and the explorer
//! selection as flags or environment variables. Workspace folders come from
//! flags, `CLIPFILE_WORKSPACE`, the config file, or the current directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clipfile_abstraction::{EnvironmentQuery, HostResult};
use clipfile_core::{CliConfig, DocumentLocation};

use crate::commands::create::CreateArgs;

/// Environment variable listing workspace folders (platform path separator).
pub const ENV_WORKSPACE: &str = "CLIPFILE_WORKSPACE";

/// Host state assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct CliEnvironment {
    active_document: Option<DocumentLocation>,
    workspace_folders: Vec<PathBuf>,
    selection: Option<PathBuf>,
}

impl CliEnvironment {
    /// Build the environment, resolving relative paths against the current
    /// directory.
    pub fn from_args(args: &CreateArgs, config: &CliConfig) -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let env_folders: Vec<PathBuf> = std::env::var_os(ENV_WORKSPACE)
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();

        let folders = if !args.workspace_folders.is_empty() {
            args.workspace_folders.clone()
        } else if !env_folders.is_empty() {
            env_folders
        } else if !config.workspace_folders.is_empty() {
            config.workspace_folders.clone()
        } else {
            vec![cwd.clone()]
        };

        let active_document = args.active_file.as_deref().map(|raw| match DocumentLocation::parse(raw) {
            DocumentLocation::Local(path) => DocumentLocation::Local(absolute(&cwd, &path)),
            other => other,
        });

        Ok(Self {
            active_document,
            workspace_folders: folders.iter().map(|folder| absolute(&cwd, folder)).collect(),
            selection: args.selected.as_deref().map(|path| absolute(&cwd, path)),
        })
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) }
}

#[async_trait]
impl EnvironmentQuery for CliEnvironment {
    fn editor_focused(&self) -> bool {
        self.active_document.is_some()
    }

    fn window_focused(&self) -> bool {
        // The command was just invoked from this terminal.
        true
    }

    fn active_file_directory(&self) -> Option<PathBuf> {
        self.active_document.as_ref().and_then(DocumentLocation::directory)
    }

    fn first_workspace_root(&self) -> Option<PathBuf> {
        self.workspace_folders.first().cloned()
    }

    async fn explorer_selection(&self) -> HostResult<Option<PathBuf>> {
        Ok(self.selection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CreateArgs {
        CreateArgs::default()
    }

    #[test]
    fn test_flags_take_precedence_over_config() {
        let config = CliConfig {
            workspace_folders: vec![PathBuf::from("/from/config")],
            ..Default::default()
        };
        let args = CreateArgs {
            workspace_folders: vec![PathBuf::from("/from/flag"), PathBuf::from("/second")],
            ..args()
        };

        let env = CliEnvironment::from_args(&args, &config).unwrap();
        assert_eq!(env.first_workspace_root(), Some(PathBuf::from("/from/flag")));
    }

    #[test]
    fn test_untitled_document_is_focused_without_directory() {
        let args = CreateArgs {
            active_file: Some("untitled:Untitled-1".to_string()),
            workspace_folders: vec![PathBuf::from("/ws")],
            ..args()
        };

        let env = CliEnvironment::from_args(&args, &CliConfig::default()).unwrap();
        assert!(env.editor_focused());
        assert_eq!(env.active_file_directory(), None);
    }

    #[test]
    fn test_local_document_directory() {
        let args = CreateArgs { active_file: Some("file:///src/app/main.rs".to_string()), ..args() };

        let env = CliEnvironment::from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(env.active_file_directory(), Some(PathBuf::from("/src/app")));
    }

    #[test]
    fn test_relative_paths_resolve_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let args = CreateArgs {
            workspace_folders: vec![PathBuf::from("proj")],
            selected: Some(PathBuf::from("proj/docs")),
            ..args()
        };

        let env = CliEnvironment::from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(env.first_workspace_root(), Some(cwd.join("proj")));
        assert_eq!(env.selection, Some(cwd.join("proj/docs")));
        assert!(!env.editor_focused());
    }
}
