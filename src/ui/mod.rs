//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - The `Prompter` capability and the terminal prompter
//! - [`mock`] - Scripted prompter for tests
//! - [`output`] - Output formatting and log setup
//!
//! # Design
//!
//! All output and prompts go through this module to ensure consistent
//! formatting and proper handling of interactive vs non-interactive modes.

pub mod mock;
pub mod output;
pub mod prompts;
