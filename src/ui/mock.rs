//! ui::mock
//!
//! Scripted prompter for deterministic testing.
//!
//! # Design
//!
//! Each expected prompt is registered up front with its message, its exact
//! option list, and a handler that produces the answer. Prompts are consumed
//! in registration order. A prompt that was not registered, or whose message
//! or options differ, panics so the test fails at the offending call.
//!
//! # Example
//!
//! ```
//! use baserepo::ui::mock::{index_for, MockPrompter};
//! use baserepo::ui::prompts::Prompter;
//!
//! let prompter = MockPrompter::new();
//! prompter.register_select("Select a base repo", ["owner/fork", "owner/repo"], |_, _, opts| {
//!     index_for(opts, "owner/repo")
//! });
//!
//! let options = vec!["owner/fork".to_string(), "owner/repo".to_string()];
//! let index = prompter.select("Select a base repo", "owner/repo", &options).unwrap();
//! assert_eq!(index, 1);
//! prompter.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::prompts::{PromptError, Prompter};

type SelectHandler = Box<dyn Fn(&str, &str, &[String]) -> Result<usize, PromptError> + Send>;

/// Mock prompter for testing.
///
/// Clones share the same script and call log.
#[derive(Clone, Default)]
pub struct MockPrompter {
    inner: Arc<Mutex<MockPrompterInner>>,
}

#[derive(Default)]
struct MockPrompterInner {
    expected: VecDeque<ExpectedSelect>,
    calls: Vec<SelectCall>,
}

struct ExpectedSelect {
    message: String,
    options: Vec<String>,
    handler: SelectHandler,
}

/// Recorded prompt for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    pub message: String,
    pub default: String,
    pub options: Vec<String>,
}

impl MockPrompter {
    /// Create a mock with no expected prompts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect a select prompt with exactly this message and option list.
    pub fn register_select<I, S, F>(&self, message: &str, options: I, handler: F)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str, &str, &[String]) -> Result<usize, PromptError> + Send + 'static,
    {
        let mut inner = self.inner.lock().unwrap();
        inner.expected.push_back(ExpectedSelect {
            message: message.to_string(),
            options: options.into_iter().map(Into::into).collect(),
            handler: Box::new(handler),
        });
    }

    /// Get all recorded prompts.
    pub fn calls(&self) -> Vec<SelectCall> {
        let inner = self.inner.lock().unwrap();
        inner.calls.clone()
    }

    /// Panic if any registered prompt was never shown.
    pub fn verify(&self) {
        let inner = self.inner.lock().unwrap();
        if let Some(pending) = inner.expected.front() {
            panic!(
                "{} registered prompt(s) never shown; next: {:?}",
                inner.expected.len(),
                pending.message
            );
        }
    }
}

impl std::fmt::Debug for MockPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("MockPrompter")
            .field("pending", &inner.expected.len())
            .field("calls", &inner.calls)
            .finish()
    }
}

impl Prompter for MockPrompter {
    fn select(
        &self,
        message: &str,
        default: &str,
        options: &[String],
    ) -> Result<usize, PromptError> {
        let expected = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(SelectCall {
                message: message.to_string(),
                default: default.to_string(),
                options: options.to_vec(),
            });
            inner.expected.pop_front()
        };

        let Some(expected) = expected else {
            panic!("unexpected prompt: {:?} with options {:?}", message, options);
        };
        assert_eq!(expected.message, message, "prompt message mismatch");
        assert_eq!(expected.options, options, "prompt options mismatch");

        (expected.handler)(message, default, options)
    }
}

/// Find the index of `value` in `options`.
///
/// Mirrors what a real operator does when picking a label.
pub fn index_for(options: &[String], value: &str) -> Result<usize, PromptError> {
    options
        .iter()
        .position(|o| o == value)
        .ok_or_else(|| PromptError::IoError(format!("no option matches '{}'", value)))
}
