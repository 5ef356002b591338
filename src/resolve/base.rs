//! resolve::base
//!
//! Innermost resolvers.
//!
//! - [`from_remotes`] picks the resolved remote, else the first remote.
//! - [`fixed`] always returns one repository (the `-R/--repo` override).

use super::{RemotesProvider, ResolveBaseRepo, ResolveError};
use crate::core::types::RepoId;

/// Resolver reading the default remote from a [`RemotesProvider`].
#[derive(Debug, Clone)]
pub struct FromRemotes<R> {
    remotes: R,
}

/// Resolve to the remote carrying the resolution marker, else the first
/// remote. Fails with [`ResolveError::NoRemotes`] when there are none.
///
/// This never reports ambiguity; wrap it with
/// [`require_no_ambiguity`](super::require_no_ambiguity) for that.
pub fn from_remotes<R: RemotesProvider>(remotes: R) -> FromRemotes<R> {
    FromRemotes { remotes }
}

impl<R: RemotesProvider> ResolveBaseRepo for FromRemotes<R> {
    fn resolve(&self) -> Result<RepoId, ResolveError> {
        let remotes = self.remotes.remotes()?;
        let remote = remotes.default_remote().ok_or(ResolveError::NoRemotes)?;
        tracing::debug!(remote = %remote.name, repo = %remote.repo, "default remote");
        Ok(remote.repo.clone())
    }
}

/// Resolver that always returns the same repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed(RepoId);

/// Resolve to `repo` without looking at remotes.
pub fn fixed(repo: RepoId) -> Fixed {
    Fixed(repo)
}

impl ResolveBaseRepo for Fixed {
    fn resolve(&self) -> Result<RepoId, ResolveError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::remotes::{Remote, Remotes, RESOLVED_BASE};
    use crate::git::GitError;

    fn repo(owner: &str, name: &str) -> RepoId {
        RepoId::new(owner, name).unwrap()
    }

    #[test]
    fn picks_resolved_remote() {
        let resolver = from_remotes(|| -> Result<Remotes, ResolveError> {
            Ok(Remotes::from(vec![
                Remote::new("origin", repo("owner", "fork")),
                Remote::new("upstream", repo("owner", "repo")).with_resolved(RESOLVED_BASE),
            ]))
        });

        assert_eq!(resolver.resolve().unwrap(), repo("owner", "repo"));
    }

    #[test]
    fn falls_back_to_first_remote() {
        let resolver = from_remotes(|| -> Result<Remotes, ResolveError> {
            Ok(Remotes::from(vec![
                Remote::new("origin", repo("owner", "fork")),
                Remote::new("upstream", repo("owner", "repo")),
            ]))
        });

        assert_eq!(resolver.resolve().unwrap(), repo("owner", "fork"));
    }

    #[test]
    fn no_remotes() {
        let resolver = from_remotes(|| -> Result<Remotes, ResolveError> { Ok(Remotes::new()) });

        assert!(matches!(resolver.resolve(), Err(ResolveError::NoRemotes)));
    }

    #[test]
    fn provider_error_is_returned() {
        let resolver = from_remotes(|| -> Result<Remotes, ResolveError> {
            Err(GitError::AccessError {
                message: "locked".to_string(),
            }
            .into())
        });

        assert!(matches!(
            resolver.resolve(),
            Err(ResolveError::Git(GitError::AccessError { .. }))
        ));
    }

    #[test]
    fn fixed_returns_repo() {
        let resolver = fixed(repo("other", "thing"));
        assert_eq!(resolver.resolve().unwrap(), repo("other", "thing"));
    }
}
