//! resolve::strict
//!
//! Reject resolution when more than one remote is configured.
//!
//! Only the number of remotes matters, never which ones they are. Two
//! remotes in the same fork network still count as ambiguous.

use super::{AmbiguousBaseRepoError, RemotesProvider, ResolveBaseRepo, ResolveError};
use crate::core::types::RepoId;

/// Resolver that fails with [`ResolveError::Ambiguous`] when the remote set
/// has more than one element, and otherwise delegates to `base`.
#[derive(Debug, Clone)]
pub struct RequireNoAmbiguity<B, R> {
    base: B,
    remotes: R,
}

/// Wrap `base` so it only runs when at most one remote exists.
///
/// Compose this outermost when a command must never guess.
pub fn require_no_ambiguity<B, R>(base: B, remotes: R) -> RequireNoAmbiguity<B, R>
where
    B: ResolveBaseRepo,
    R: RemotesProvider,
{
    RequireNoAmbiguity { base, remotes }
}

impl<B, R> ResolveBaseRepo for RequireNoAmbiguity<B, R>
where
    B: ResolveBaseRepo,
    R: RemotesProvider,
{
    fn resolve(&self) -> Result<RepoId, ResolveError> {
        // TODO: count remotes per fork network instead of raw remotes once
        // the network can be queried from the forge.
        let remotes = self.remotes.remotes()?;

        if remotes.len() > 1 {
            tracing::debug!(count = remotes.len(), "multiple remotes, refusing to guess");
            return Err(AmbiguousBaseRepoError { remotes }.into());
        }

        self.base.resolve()
    }
}
