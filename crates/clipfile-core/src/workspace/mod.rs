//! Workspace state: where a new file goes and how it is written.

pub mod file_ops;
pub mod target;

use std::path::{Component, Path, PathBuf};

pub use file_ops::{LocalFileStore, confirm_overwrite, write_document, OVERWRITE_CHOICE};
pub use target::{TargetDirectory, TargetSource, resolve_target_directory};

/// Location of the document shown in the focused editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    /// Backed by local storage.
    Local(PathBuf),
    /// Anything else (`untitled:`, `vscode-remote:`, `git:`, ...).
    Virtual {
        /// URI scheme, lowercased.
        scheme: String,
    },
}

impl DocumentLocation {
    /// Parse a plain path, a `file://` URI, or any other `scheme:` URI.
    ///
    /// Single-letter schemes are read as Windows drive letters.
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix("file://") {
            // file:///tmp/a.rs and file://localhost/tmp/a.rs
            let path = rest.strip_prefix("localhost").unwrap_or(rest);
            return Self::Local(PathBuf::from(path));
        }

        match uri_scheme(raw) {
            Some(scheme) => Self::Virtual { scheme: scheme.to_ascii_lowercase() },
            None => Self::Local(PathBuf::from(raw)),
        }
    }

    /// Directory containing the document, for local documents only.
    pub fn directory(&self) -> Option<PathBuf> {
        match self {
            Self::Local(path) => path.parent().map(Path::to_path_buf),
            Self::Virtual { .. } => None,
        }
    }
}

/// Join a user-supplied file name onto `dir`.
///
/// Root and drive prefixes in `name` are ignored, so an absolute name still
/// lands under `dir`. `.` is dropped and `..` removes the previous component.
pub fn join_file_name(dir: &Path, name: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::ParentDir => {
                path.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    path
}

fn uri_scheme(raw: &str) -> Option<&str> {
    let (scheme, _) = raw.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = scheme.len() > 1
        && first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let location = DocumentLocation::parse("/home/me/src/main.rs");
        assert_eq!(location, DocumentLocation::Local(PathBuf::from("/home/me/src/main.rs")));
        assert_eq!(location.directory(), Some(PathBuf::from("/home/me/src")));
    }

    #[test]
    fn test_parse_file_uri() {
        assert_eq!(
            DocumentLocation::parse("file:///tmp/a.rs"),
            DocumentLocation::Local(PathBuf::from("/tmp/a.rs"))
        );
        assert_eq!(
            DocumentLocation::parse("file://localhost/tmp/a.rs"),
            DocumentLocation::Local(PathBuf::from("/tmp/a.rs"))
        );
    }

    #[test]
    fn test_parse_untitled_document() {
        let location = DocumentLocation::parse("untitled:Untitled-1");
        assert_eq!(location, DocumentLocation::Virtual { scheme: "untitled".to_string() });
        assert_eq!(location.directory(), None);
    }

    #[test]
    fn test_parse_windows_drive_is_local() {
        assert_eq!(
            DocumentLocation::parse("C:\\work\\a.rs"),
            DocumentLocation::Local(PathBuf::from("C:\\work\\a.rs"))
        );
    }

    #[test]
    fn test_join_file_name_keeps_absolute_names_inside() {
        let dir = Path::new("/work/proj");
        assert_eq!(join_file_name(dir, "/tmp/x/escape.txt"), PathBuf::from("/work/proj/tmp/x/escape.txt"));
        assert_eq!(join_file_name(dir, "src/lib.rs"), PathBuf::from("/work/proj/src/lib.rs"));
        assert_eq!(join_file_name(dir, "./a.txt"), PathBuf::from("/work/proj/a.txt"));
    }

    #[test]
    fn test_join_file_name_resolves_parent_components() {
        let dir = Path::new("/work/proj");
        assert_eq!(join_file_name(dir, "docs/../notes.md"), PathBuf::from("/work/proj/notes.md"));
        assert_eq!(join_file_name(dir, "../sibling.txt"), PathBuf::from("/work/sibling.txt"));
    }

    #[test]
    fn test_parse_remote_scheme() {
        let location = DocumentLocation::parse("vscode-remote://ssh/home/a.rs");
        assert_eq!(location, DocumentLocation::Virtual { scheme: "vscode-remote".to_string() });
    }
}
