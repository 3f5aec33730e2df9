//! Interactive terminal prompts.

use async_trait::async_trait;
use clipfile_abstraction::{ChoiceRequest, HostError, HostResult, InputRequest, Prompter};
use inquire::{InquireError, Select, Text};

/// Extra entry appended to every dialog so it can be dismissed by choice.
const CANCEL_LABEL: &str = "Cancel";

/// Prompts on the terminal with `inquire`.
///
/// A preset name answers the name prompt; `assume_yes` accepts every
/// suggestion and picks the first (affirmative) choice of every dialog.
pub struct TerminalPrompter {
    preset_name: Option<String>,
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(preset_name: Option<String>, assume_yes: bool) -> Self {
        Self { preset_name, assume_yes }
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn input(&self, request: &InputRequest) -> HostResult<Option<String>> {
        if let Some(ref name) = self.preset_name {
            return Ok(Some(name.clone()));
        }
        if self.assume_yes {
            return Ok(Some(request.value.clone()));
        }

        let message = format!("{}:", request.prompt);
        let initial = request.value.clone();
        prompt_blocking(move || Text::new(&message).with_initial_value(&initial).prompt()).await
    }

    async fn choose(&self, request: &ChoiceRequest) -> HostResult<Option<String>> {
        if self.assume_yes {
            return Ok(request.choices.first().cloned());
        }

        let message = request.message.clone();
        let mut options = request.choices.clone();
        options.push(CANCEL_LABEL.to_string());

        let answer = prompt_blocking(move || Select::new(&message, options).prompt()).await?;
        Ok(answer.filter(|choice| choice != CANCEL_LABEL))
    }
}

/// Run a blocking `inquire` prompt off the async worker threads.
async fn prompt_blocking<T, F>(prompt: F) -> HostResult<Option<T>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, InquireError> + Send + 'static,
{
    let answer = tokio::task::spawn_blocking(prompt)
        .await
        .map_err(|e| HostError::Other(format!("Prompt task failed: {}", e)))?;
    dismissed_as_none(answer)
}

fn dismissed_as_none<T>(result: Result<T, InquireError>) -> HostResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(InquireError::NotTTY) => Err(HostError::PromptUnavailable(
            "no interactive terminal; pass --name or --yes".to_string(),
        )),
        Err(e) => Err(HostError::Prompt(e.to_string())),
    }
}
