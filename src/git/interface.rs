//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the single doorway to Git for baserepo. Remote listing and
//! the resolution marker both live in git config, and both are read and
//! written here.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::RemoteNotFound`]: Requested remote does not exist
//! - [`GitError::AccessError`]: Config is locked or unreadable
//! - [`GitError::Internal`]: Anything else reported by libgit2
//!
//! # Example
//!
//! ```ignore
//! use baserepo::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for remote in git.remotes()?.iter() {
//!     println!("{} -> {}", remote.name, remote.repo);
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::remotes::{Remote, Remotes, RESOLVED_BASE};
use crate::core::types::RepoId;
use crate::resolve::{RemotesProvider, ResolveError};

/// Per-remote git config key holding the resolution marker.
pub const RESOLVED_KEY: &str = "baserepo-resolved";

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Requested remote does not exist.
    #[error("remote not found: {name}")]
    RemoteNotFound {
        /// The remote that was not found
        name: String,
    },

    /// Permission or filesystem error.
    #[error("repository access error: {message}")]
    AccessError {
        /// Description of the error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        match err.code() {
            git2::ErrorCode::Locked => GitError::AccessError {
                message: format!("config is locked: {}", err.message()),
            },
            _ => GitError::Internal {
                message: err.message().to_string(),
            },
        }
    }
}

/// Handle to an opened repository.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("git_dir", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open the repository containing `path`.
    ///
    /// Searches upward from `path`, like `git` itself.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepo {
                    path: path.to_path_buf(),
                }
            } else {
                GitError::from(e)
            }
        })?;
        Ok(Self { repo })
    }

    /// Path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // Remote Operations
    // =========================================================================

    /// List configured remotes that point at a recognisable repository.
    ///
    /// Order follows libgit2's remote listing, which is name order, so
    /// `origin` precedes `upstream` and is the "first" remote resolvers fall
    /// back to. Remotes with no URL, or with a URL that is not a
    /// `host/owner/name` location, are skipped.
    pub fn remotes(&self) -> Result<Remotes, GitError> {
        let names = self.repo.remotes()?;
        let config = self.repo.config()?;
        let mut remotes = Remotes::new();

        for name in names.iter().flatten() {
            let remote = self.repo.find_remote(name)?;
            let Some(url) = remote.url() else {
                tracing::debug!(remote = name, "skipping remote without a URL");
                continue;
            };
            let Some(repo) = RepoId::from_url(url) else {
                tracing::debug!(remote = name, url, "skipping remote with unrecognised URL");
                continue;
            };

            let mut entry = Remote::new(name, repo);
            entry.resolved = read_string(&config, &resolved_key(name))?;
            remotes.push(entry);
        }

        tracing::debug!(count = remotes.len(), "listed remotes");
        Ok(remotes)
    }

    /// Get the URL for a remote.
    ///
    /// Returns `None` if the remote doesn't exist.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>, GitError> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Mark `name` as the resolved base remote.
    ///
    /// The marker is removed from every other remote so at most one carries it.
    pub fn set_resolved(&self, name: &str) -> Result<(), GitError> {
        if self.remote_url(name)?.is_none() {
            return Err(GitError::RemoteNotFound {
                name: name.to_string(),
            });
        }

        self.clear_resolved()?;
        let mut config = self.local_config()?;
        config.set_str(&resolved_key(name), RESOLVED_BASE)?;
        tracing::debug!(remote = name, "set resolution marker");
        Ok(())
    }

    /// Remove the resolution marker from all remotes.
    pub fn clear_resolved(&self) -> Result<(), GitError> {
        let names = self.repo.remotes()?;
        let mut config = self.local_config()?;

        for name in names.iter().flatten() {
            match config.remove(&resolved_key(name)) {
                Ok(()) => tracing::debug!(remote = name, "cleared resolution marker"),
                Err(e) if e.code() == git2::ErrorCode::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn local_config(&self) -> Result<git2::Config, GitError> {
        Ok(self.repo.config()?.open_level(git2::ConfigLevel::Local)?)
    }
}

impl RemotesProvider for Git {
    fn remotes(&self) -> Result<Remotes, ResolveError> {
        Ok(Git::remotes(self)?)
    }
}

fn resolved_key(remote: &str) -> String {
    format!("remote.{}.{}", remote, RESOLVED_KEY)
}

fn read_string(config: &git2::Config, key: &str) -> Result<Option<String>, GitError> {
    match config.get_string(key) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
