//! baserepo - Resolve the base repository for a working copy
//!
//! A working copy can be linked to several remotes: a fork, its upstream,
//! a mirror. Commands that act on "the repository" need exactly one. This
//! crate decides which, and is the only place ambiguity is detected and
//! settled.
//!
//! # Architecture
//!
//! - [`resolve`] - Resolver capability, ambiguity signal, and the wrappers
//!   that add policy around a base resolver
//! - [`core`] - Domain types (repository identity, remotes) and configuration
//! - [`git`] - Single interface for reading remotes from Git
//! - [`ui`] - Prompts, output and logging
//! - [`cli`] - Command-line interface layer
//!
//! # Invariants
//!
//! 1. No resolver guesses silently when strictness is requested
//! 2. Ambiguity is a typed error carrying the full remote set
//! 3. Errors a wrapper does not handle are forwarded unmodified

pub mod cli;
pub mod core;
pub mod git;
pub mod resolve;
pub mod ui;
