//! Terminal implementations of the host services.

mod editor;
mod environment;
mod notify;
mod prompt;
mod stdin;

pub use editor::EditorOpener;
pub use environment::CliEnvironment;
pub use notify::ConsoleNotifier;
pub use prompt::TerminalPrompter;
pub use stdin::StdinClipboard;
