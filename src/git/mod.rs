//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2`. All reads go through libgit2 (no shelling out to the git CLI).
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Listing remotes as [`Remotes`](crate::core::remotes::Remotes)
//! - Reading and writing the per-remote resolution marker
//!
//! The [`Git`] handle is also the production
//! [`RemotesProvider`](crate::resolve::RemotesProvider).

mod interface;

pub use interface::{Git, GitError, RESOLVED_KEY};
