//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode a
//! prompt fails with [`PromptError::NotInteractive`] so the caller can
//! report the underlying problem instead.
//!
//! Code that needs a choice from the operator depends on the [`Prompter`]
//! trait, never on a terminal. [`TerminalPrompter`] renders to stderr;
//! [`MockPrompter`](super::mock::MockPrompter) scripts answers in tests.

use std::io::IsTerminal;

use dialoguer::Select;
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// A single-select prompt.
///
/// Any `Fn(&str, &str, &[String]) -> Result<usize, PromptError>` is a prompter.
pub trait Prompter {
    /// Ask the operator to pick one of `options`.
    ///
    /// `default` is the label to preselect; it may be empty. Returns the
    /// index of the chosen option.
    fn select(&self, message: &str, default: &str, options: &[String])
        -> Result<usize, PromptError>;
}

impl<F> Prompter for F
where
    F: Fn(&str, &str, &[String]) -> Result<usize, PromptError>,
{
    fn select(
        &self,
        message: &str,
        default: &str,
        options: &[String],
    ) -> Result<usize, PromptError> {
        self(message, default, options)
    }
}

/// Prompter that renders on the terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a terminal prompter.
    ///
    /// With `interactive == false` every prompt fails with
    /// [`PromptError::NotInteractive`].
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Check if stdin and stderr are both attached to a terminal.
    pub fn is_tty() -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}

impl Prompter for TerminalPrompter {
    fn select(
        &self,
        message: &str,
        default: &str,
        options: &[String],
    ) -> Result<usize, PromptError> {
        if !self.interactive || !Self::is_tty() {
            return Err(PromptError::NotInteractive);
        }

        let default_index = options.iter().position(|o| o == default).unwrap_or(0);

        Select::new()
            .with_prompt(message)
            .items(options)
            .default(default_index)
            .interact_opt()
            .map_err(|e| PromptError::IoError(e.to_string()))?
            .ok_or(PromptError::Cancelled)
    }
}
