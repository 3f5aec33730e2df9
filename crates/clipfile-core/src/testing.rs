//! In-memory host fakes for unit tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use clipfile_abstraction::{
    ChoiceRequest, ClipboardSource, DocumentOpener, EntryKind, EnvironmentQuery, FileStore,
    HostError, HostResult, InputRequest, NotificationLevel, Notifier, Prompter,
};

pub struct FakeClipboard(pub String);

#[async_trait]
impl ClipboardSource for FakeClipboard {
    async fn read_text(&self) -> HostResult<String> {
        Ok(self.0.clone())
    }
}

/// Answers prompts from a script and records what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    input_answer: Option<String>,
    accept_suggestion: bool,
    choose_answer: Option<String>,
    inputs: Mutex<Vec<InputRequest>>,
    choices: Mutex<Vec<ChoiceRequest>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm the pre-filled value unchanged.
    pub fn accept_suggestion(mut self) -> Self {
        self.accept_suggestion = true;
        self
    }

    pub fn input_answer(mut self, answer: Option<&str>) -> Self {
        self.input_answer = answer.map(str::to_string);
        self
    }

    pub fn choose_answer(mut self, answer: Option<&str>) -> Self {
        self.choose_answer = answer.map(str::to_string);
        self
    }

    pub fn inputs_shown(&self) -> Vec<InputRequest> {
        self.inputs.lock().unwrap().clone()
    }

    pub fn choices_shown(&self) -> Vec<ChoiceRequest> {
        self.choices.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn input(&self, request: &InputRequest) -> HostResult<Option<String>> {
        self.inputs.lock().unwrap().push(request.clone());
        if self.accept_suggestion {
            return Ok(Some(request.value.clone()));
        }
        Ok(self.input_answer.clone())
    }

    async fn choose(&self, request: &ChoiceRequest) -> HostResult<Option<String>> {
        self.choices.lock().unwrap().push(request.clone());
        Ok(self.choose_answer.clone())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

#[derive(Default)]
pub struct FakeEnvironment {
    pub editor_focused: bool,
    pub window_focused: bool,
    pub active_dir: Option<PathBuf>,
    pub workspace_root: Option<PathBuf>,
    pub selection: Option<PathBuf>,
    pub selection_queries: AtomicUsize,
}

impl FakeEnvironment {
    pub fn selection_queries(&self) -> usize {
        self.selection_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnvironmentQuery for FakeEnvironment {
    fn editor_focused(&self) -> bool {
        self.editor_focused
    }

    fn window_focused(&self) -> bool {
        self.window_focused
    }

    fn active_file_directory(&self) -> Option<PathBuf> {
        self.active_dir.clone()
    }

    fn first_workspace_root(&self) -> Option<PathBuf> {
        self.workspace_root.clone()
    }

    async fn explorer_selection(&self) -> HostResult<Option<PathBuf>> {
        self.selection_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.selection.clone())
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<PathBuf>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentOpener for RecordingOpener {
    async fn open_and_show(&self, path: &Path) -> HostResult<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// File store whose writes always fail.
pub struct ReadOnlyFileStore;

#[async_trait]
impl FileStore for ReadOnlyFileStore {
    async fn stat(&self, _path: &Path) -> HostResult<Option<EntryKind>> {
        Ok(None)
    }

    async fn write(&self, path: &Path, _contents: &[u8]) -> HostResult<()> {
        Err(HostError::io(
            path,
            "write",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file system"),
        ))
    }
}
