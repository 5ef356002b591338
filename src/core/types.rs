//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoId`] - Validated repository identity (host, owner, name)
//!
//! # Validation
//!
//! These types enforce validity at construction time. A `RepoId` with an
//! empty owner or name cannot be represented.
//!
//! # Examples
//!
//! ```
//! use baserepo::core::types::RepoId;
//!
//! let repo: RepoId = "owner/repo".parse().unwrap();
//! assert_eq!(repo.full_name(), "owner/repo");
//! assert_eq!(repo.host(), "github.com");
//!
//! let enterprise: RepoId = "ghe.example.com/owner/repo".parse().unwrap();
//! assert_eq!(enterprise.host(), "ghe.example.com");
//!
//! assert!("owner".parse::<RepoId>().is_err());
//! assert!("owner/".parse::<RepoId>().is_err());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host assumed when a repository is written as `owner/name`.
pub const DEFAULT_HOST: &str = "github.com";

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository '{input}': {reason}")]
    InvalidRepo { input: String, reason: String },
}

impl TypeError {
    fn invalid_repo(input: &str, reason: impl Into<String>) -> Self {
        TypeError::InvalidRepo {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Identity of a remote repository.
///
/// Two identities are the same repository when host, owner and name match.
/// Owner and name compare ASCII case-insensitively, as hosting services
/// treat them.
///
/// # Example
///
/// ```
/// use baserepo::core::types::RepoId;
///
/// let a = RepoId::new("Owner", "Repo").unwrap();
/// let b = RepoId::new("owner", "repo").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "Owner/Repo");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    host: String,
    owner: String,
    name: String,
}

impl RepoId {
    /// Create a repository identity on the default host.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepo` if owner or name is not a valid segment.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, TypeError> {
        Self::with_host(DEFAULT_HOST, owner, name)
    }

    /// Create a repository identity on an explicit host.
    pub fn with_host(
        host: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, TypeError> {
        let host = host.into();
        let owner = owner.into();
        let name = name.into();
        let display = format!("{}/{}/{}", host, owner, name);

        validate_segment(&display, "host", &host)?;
        validate_segment(&display, "owner", &owner)?;
        validate_segment(&display, "name", &name)?;

        Ok(Self {
            host: host.to_ascii_lowercase(),
            owner,
            name,
        })
    }

    /// Parse a git remote URL into a repository identity.
    ///
    /// Handles HTTPS, `ssh://` and scp-style URLs:
    /// - `https://github.com/owner/repo.git`
    /// - `ssh://git@github.com/owner/repo.git`
    /// - `git@github.com:owner/repo.git`
    ///
    /// Returns `None` if the URL does not point at a `host/owner/name` location.
    ///
    /// # Example
    ///
    /// ```
    /// use baserepo::core::types::RepoId;
    ///
    /// let repo = RepoId::from_url("git@github.com:owner/repo.git").unwrap();
    /// assert_eq!(repo.full_name(), "owner/repo");
    ///
    /// assert!(RepoId::from_url("not-a-url").is_none());
    /// ```
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim();

        if let Some((scheme, rest)) = url.split_once("://") {
            if !matches!(scheme, "https" | "http" | "ssh" | "git" | "git+ssh") {
                return None;
            }
            let (authority, path) = rest.split_once('/')?;
            let host = strip_userinfo(authority);
            let host = host.split(':').next().unwrap_or(host);
            return Self::from_host_and_path(host, path);
        }

        // scp-like syntax: [user@]host:owner/repo
        let (authority, path) = url.split_once(':')?;
        if authority.contains('/') {
            return None;
        }
        Self::from_host_and_path(strip_userinfo(authority), path)
    }

    fn from_host_and_path(host: &str, path: &str) -> Option<Self> {
        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let (owner, name) = path.split_once('/')?;
        if name.contains('/') {
            return None;
        }
        Self::with_host(host, owner, name).ok()
    }

    /// Get the host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format as `owner/name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Check if this identity lives on the default host.
    pub fn is_default_host(&self) -> bool {
        self.host == DEFAULT_HOST
    }
}

fn strip_userinfo(authority: &str) -> &str {
    authority
        .rsplit_once('@')
        .map(|(_, host)| host)
        .unwrap_or(authority)
}

fn validate_segment(input: &str, what: &str, segment: &str) -> Result<(), TypeError> {
    if segment.is_empty() {
        return Err(TypeError::invalid_repo(
            input,
            format!("{} cannot be empty", what),
        ));
    }
    if segment.contains('/') {
        return Err(TypeError::invalid_repo(
            input,
            format!("{} cannot contain '/'", what),
        ));
    }
    if segment.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(TypeError::invalid_repo(
            input,
            format!("{} cannot contain whitespace", what),
        ));
    }
    Ok(())
}

/// Identities compare by owner and name only, ignoring ASCII case. The host
/// is not part of equality; use [`RepoId::host`] to tell hosts apart.
impl PartialEq for RepoId {
    fn eq(&self, other: &Self) -> bool {
        self.owner.eq_ignore_ascii_case(&other.owner)
            && self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for RepoId {}

impl Hash for RepoId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.to_ascii_lowercase().hash(state);
        self.name.to_ascii_lowercase().hash(state);
    }
}

impl FromStr for RepoId {
    type Err = TypeError;

    /// Parse `owner/name` or `host/owner/name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [owner, name] => Self::new(*owner, *name).map_err(|e| rebind(s, e)),
            [host, owner, name] => Self::with_host(*host, *owner, *name).map_err(|e| rebind(s, e)),
            _ => Err(TypeError::invalid_repo(
                s,
                "expected OWNER/REPO or HOST/OWNER/REPO",
            )),
        }
    }
}

/// Report validation errors against the text the caller supplied.
fn rebind(input: &str, err: TypeError) -> TypeError {
    match err {
        TypeError::InvalidRepo { reason, .. } => TypeError::invalid_repo(input, reason),
    }
}

impl TryFrom<String> for RepoId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RepoId> for String {
    fn from(repo: RepoId) -> Self {
        if repo.is_default_host() {
            repo.full_name()
        } else {
            format!("{}/{}", repo.host, repo.full_name())
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
