//! core::remotes
//!
//! Configured remotes and the resolution marker.
//!
//! # Ordering
//!
//! [`Remotes`] preserves the order its provider produced. That order drives
//! both iteration and the fallback default: when no remote carries the
//! resolution marker, the first remote is the default.
//!
//! # Resolution Marker
//!
//! A remote is *resolved* when prior configuration explicitly chose it as the
//! default target (see `baserepo set-default`). At most one remote should carry
//! the marker, but this is not enforced: the first marked remote wins.

use serde::Serialize;

use super::types::RepoId;

/// Marker value written for a remote chosen as the base repository.
pub const RESOLVED_BASE: &str = "base";

/// A configured git remote and the repository it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    /// Local remote name (e.g. "origin")
    pub name: String,
    /// Repository the remote points at
    pub repo: RepoId,
    /// Raw resolution marker, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

impl Remote {
    /// Create an unmarked remote.
    pub fn new(name: impl Into<String>, repo: RepoId) -> Self {
        Self {
            name: name.into(),
            repo,
            resolved: None,
        }
    }

    /// Set the resolution marker.
    pub fn with_resolved(mut self, marker: impl Into<String>) -> Self {
        self.resolved = Some(marker.into());
        self
    }

    /// Check if this remote carries a non-empty resolution marker.
    pub fn is_resolved(&self) -> bool {
        self.resolved.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// An ordered set of remotes.
///
/// # Example
///
/// ```
/// use baserepo::core::remotes::{Remote, Remotes};
/// use baserepo::core::types::RepoId;
///
/// let remotes = Remotes::from(vec![
///     Remote::new("origin", RepoId::new("owner", "fork").unwrap()),
///     Remote::new("upstream", RepoId::new("owner", "repo").unwrap()).with_resolved("base"),
/// ]);
///
/// assert_eq!(remotes.len(), 2);
/// assert_eq!(remotes.default_remote().unwrap().name, "upstream");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Remotes(Vec<Remote>);

impl Remotes {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a remote, keeping insertion order.
    pub fn push(&mut self, remote: Remote) {
        self.0.push(remote);
    }

    /// Number of remotes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no remotes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, Remote> {
        self.0.iter()
    }

    /// Get a remote by position.
    pub fn get(&self, index: usize) -> Option<&Remote> {
        self.0.get(index)
    }

    /// Find a remote by its local name.
    pub fn find_by_name(&self, name: &str) -> Option<&Remote> {
        self.0.iter().find(|r| r.name == name)
    }

    /// Find the first remote pointing at `repo`.
    ///
    /// Matches on owner and name. A remote on the same host as `repo` is
    /// preferred when several share the owner and name.
    pub fn find_by_repo(&self, repo: &RepoId) -> Option<&Remote> {
        self.0
            .iter()
            .find(|r| &r.repo == repo && r.repo.host() == repo.host())
            .or_else(|| self.0.iter().find(|r| &r.repo == repo))
    }

    /// The first remote carrying the resolution marker.
    pub fn resolved_remote(&self) -> Option<&Remote> {
        self.0.iter().find(|r| r.is_resolved())
    }

    /// The resolved remote, else the first remote, else `None`.
    pub fn default_remote(&self) -> Option<&Remote> {
        self.resolved_remote().or_else(|| self.0.first())
    }

    /// `owner/name` labels for every remote, in set order.
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|r| r.repo.full_name()).collect()
    }
}

impl From<Vec<Remote>> for Remotes {
    fn from(remotes: Vec<Remote>) -> Self {
        Self(remotes)
    }
}

impl FromIterator<Remote> for Remotes {
    fn from_iter<I: IntoIterator<Item = Remote>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Remotes {
    type Item = Remote;
    type IntoIter = std::vec::IntoIter<Remote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Remotes {
    type Item = &'a Remote;
    type IntoIter = std::slice::Iter<'a, Remote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
