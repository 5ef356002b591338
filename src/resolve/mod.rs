//! resolve
//!
//! Base repository resolution as a chain of wrapped resolvers.
//!
//! # Architecture
//!
//! A resolver is any value implementing [`ResolveBaseRepo`]: a zero-argument
//! operation producing a [`RepoId`] or failing. Policies are added by
//! wrapping one resolver in another:
//!
//! - [`require_no_ambiguity`] rejects working copies with more than one
//!   remote, returning [`ResolveError::Ambiguous`] instead of resolving.
//! - [`prompt_when_ambiguous`] reacts to [`ResolveError::Ambiguous`] from the
//!   resolver it wraps by asking the operator to pick a remote.
//!
//! Neither wrapper knows what it wraps. The base resolvers in [`base`] read
//! the remote set or return a fixed override.
//!
//! # Error Propagation
//!
//! Every wrapper either fully handles an error (only the ambiguity signal,
//! only in the prompting wrapper) or forwards it unmodified.
//!
//! # Example
//!
//! ```
//! use baserepo::core::remotes::{Remote, Remotes};
//! use baserepo::core::types::RepoId;
//! use baserepo::resolve::{self, ResolveBaseRepo, ResolveError};
//!
//! let remotes = || -> Result<Remotes, ResolveError> {
//!     Ok(Remotes::from(vec![
//!         Remote::new("origin", RepoId::new("owner", "fork").unwrap()),
//!         Remote::new("upstream", RepoId::new("owner", "repo").unwrap()),
//!     ]))
//! };
//!
//! let resolver = resolve::require_no_ambiguity(resolve::from_remotes(remotes), remotes);
//!
//! match resolver.resolve() {
//!     Err(ResolveError::Ambiguous(err)) => assert_eq!(err.remotes.len(), 2),
//!     other => panic!("expected ambiguity, got {:?}", other),
//! }
//! ```

pub mod base;
pub mod prompt;
pub mod strict;

pub use base::{fixed, from_remotes, Fixed, FromRemotes};
pub use prompt::{prompt_when_ambiguous, PromptWhenAmbiguous, SELECT_PROMPT};
pub use strict::{require_no_ambiguity, RequireNoAmbiguity};

use thiserror::Error;

use crate::core::remotes::Remotes;
use crate::core::types::{RepoId, TypeError};
use crate::git::GitError;
use crate::ui::prompts::PromptError;

/// More than one remote was configured and no policy picked one.
///
/// Carries the full remote set so an outer layer can disambiguate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("multiple remotes detected. please specify which repo to use by providing the -R or --repo argument")]
pub struct AmbiguousBaseRepoError {
    /// The remotes that made resolution ambiguous, in provider order
    pub remotes: Remotes,
}

/// Errors from base repository resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// More than one candidate remote.
    #[error(transparent)]
    Ambiguous(#[from] AmbiguousBaseRepoError),

    /// The remote set could not be read.
    #[error(transparent)]
    Git(#[from] GitError),

    /// The operator prompt failed or was cancelled.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// No remote points at a recognisable repository.
    #[error("no git remotes found")]
    NoRemotes,

    /// A repository given by the caller could not be parsed.
    #[error(transparent)]
    InvalidRepo(#[from] TypeError),

    /// The prompt answer did not map back to a remote.
    ///
    /// Indicates the option list and the remote set disagree; a defect.
    #[error("invalid selection '{selection}': {reason}")]
    InvalidSelection { selection: String, reason: String },
}

impl ResolveError {
    /// The ambiguity signal, if this is one.
    pub fn as_ambiguous(&self) -> Option<&AmbiguousBaseRepoError> {
        match self {
            ResolveError::Ambiguous(err) => Some(err),
            _ => None,
        }
    }
}

/// A base repository resolver.
///
/// Any `Fn() -> Result<RepoId, ResolveError>` is a resolver.
pub trait ResolveBaseRepo {
    /// Resolve the repository to operate against.
    fn resolve(&self) -> Result<RepoId, ResolveError>;
}

impl<F> ResolveBaseRepo for F
where
    F: Fn() -> Result<RepoId, ResolveError>,
{
    fn resolve(&self) -> Result<RepoId, ResolveError> {
        self()
    }
}

/// Supplies the current remote set.
///
/// Any `Fn() -> Result<Remotes, ResolveError>` is a provider. Called once
/// per resolution; implementations decide on caching.
pub trait RemotesProvider {
    /// List the configured remotes, in order.
    fn remotes(&self) -> Result<Remotes, ResolveError>;
}

impl<F> RemotesProvider for F
where
    F: Fn() -> Result<Remotes, ResolveError>,
{
    fn remotes(&self) -> Result<Remotes, ResolveError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguity_message() {
        let err = AmbiguousBaseRepoError {
            remotes: Remotes::new(),
        };
        assert_eq!(
            err.to_string(),
            "multiple remotes detected. please specify which repo to use by providing the -R or --repo argument"
        );
    }

    #[test]
    fn ambiguity_is_matchable_and_displays_transparently() {
        let err: ResolveError = AmbiguousBaseRepoError {
            remotes: Remotes::new(),
        }
        .into();

        assert!(err.as_ambiguous().is_some());
        assert!(err.to_string().starts_with("multiple remotes detected"));
        assert!(ResolveError::NoRemotes.as_ambiguous().is_none());
    }

    #[test]
    fn upstream_errors_keep_their_message() {
        let err: ResolveError = PromptError::Cancelled.into();
        assert_eq!(err.to_string(), "prompt cancelled by user");

        let err: ResolveError = GitError::Internal {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "git error: boom");
    }
}
