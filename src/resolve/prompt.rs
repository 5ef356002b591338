//! resolve::prompt
//!
//! Ask the operator to pick a repository when the wrapped resolver reports
//! ambiguity.
//!
//! # Design
//!
//! This wrapper never decides *that* resolution is ambiguous. It only reacts
//! to [`ResolveError::Ambiguous`] from the resolver it wraps, so the same
//! signal can be a hard failure (strict wrapper alone) or a prompt (this
//! wrapper layered on top).
//!
//! Per call: the base resolver runs once; on ambiguity exactly one prompt is
//! shown; there are no retries.
//!
//! # Default Selection
//!
//! The preselected option is the remote carrying the resolution marker,
//! else the first remote. An ambiguity signal with no candidates is
//! returned unchanged; there is nothing to offer.

use super::{AmbiguousBaseRepoError, ResolveBaseRepo, ResolveError};
use crate::core::types::{RepoId, TypeError};
use crate::ui::prompts::Prompter;

/// Message shown when asking for the base repository.
pub const SELECT_PROMPT: &str = "Select a base repo";

/// Resolver that turns an ambiguity signal from `base` into a prompt.
#[derive(Debug, Clone)]
pub struct PromptWhenAmbiguous<B, P> {
    base: B,
    prompter: Option<P>,
}

/// Wrap `base` so ambiguity is resolved by asking the operator.
///
/// With `prompter == None` no prompt is ever attempted: an ambiguity signal
/// from `base` is returned unchanged.
pub fn prompt_when_ambiguous<B, P>(base: B, prompter: Option<P>) -> PromptWhenAmbiguous<B, P>
where
    B: ResolveBaseRepo,
    P: Prompter,
{
    PromptWhenAmbiguous { base, prompter }
}

impl<B, P> ResolveBaseRepo for PromptWhenAmbiguous<B, P>
where
    B: ResolveBaseRepo,
    P: Prompter,
{
    fn resolve(&self) -> Result<RepoId, ResolveError> {
        let ambiguous = match self.base.resolve() {
            Ok(repo) => return Ok(repo),
            Err(ResolveError::Ambiguous(ambiguous)) => ambiguous,
            Err(err) => return Err(err),
        };

        let Some(prompter) = &self.prompter else {
            tracing::debug!("ambiguous base repo but no prompter available");
            return Err(ambiguous.into());
        };
        if ambiguous.remotes.is_empty() {
            tracing::debug!("ambiguous base repo with no candidates");
            return Err(ambiguous.into());
        }

        prompt_for_repo(&ambiguous, prompter)
    }
}

fn prompt_for_repo<P: Prompter>(
    ambiguous: &AmbiguousBaseRepoError,
    prompter: &P,
) -> Result<RepoId, ResolveError> {
    let remotes = &ambiguous.remotes;

    let default = remotes
        .default_remote()
        .map(|r| r.repo.full_name())
        .unwrap_or_default();
    let options = remotes.labels();

    tracing::debug!(default = %default, options = ?options, "prompting for base repo");
    let index = prompter.select(SELECT_PROMPT, &default, &options)?;

    let Some(remote) = remotes.get(index) else {
        return Err(ResolveError::InvalidSelection {
            selection: index.to_string(),
            reason: format!("only {} option(s) were offered", options.len()),
        });
    };

    // The label is what the operator saw; parse it back, then carry over the
    // host the remote was configured with.
    let label = &options[index];
    let picked: RepoId = label
        .parse()
        .map_err(|e: TypeError| ResolveError::InvalidSelection {
            selection: label.clone(),
            reason: e.to_string(),
        })?;
    let selected = RepoId::with_host(remote.repo.host(), picked.owner(), picked.name())
        .map_err(|e| ResolveError::InvalidSelection {
            selection: label.clone(),
            reason: e.to_string(),
        })?;

    tracing::debug!(remote = %remote.name, repo = %selected, "base repo selected");
    Ok(selected)
}
