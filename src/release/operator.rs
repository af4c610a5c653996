//! Operator interaction: prompts and notices.

use dialoguer::{Confirm, Input};

use crate::error::ReleaseError;

/// Capability contract for everything the release pipeline asks of or shows
/// to the operator.
#[cfg_attr(test, mockall::automock)]
pub trait Operator: Send + Sync {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, ReleaseError>;

    /// Ask for one line of free text.
    fn ask_line(&self, prompt: &str) -> Result<String, ReleaseError>;

    /// Show a notice.
    fn show(&self, text: &str);
}

/// Operator on the controlling terminal.
pub struct ConsoleOperator;

impl Operator for ConsoleOperator {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, ReleaseError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(ReleaseError::Prompt)
    }

    fn ask_line(&self, prompt: &str) -> Result<String, ReleaseError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(ReleaseError::Prompt)
    }

    fn show(&self, text: &str) {
        println!("{}", text);
    }
}
