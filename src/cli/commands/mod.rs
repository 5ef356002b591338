//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Composes the resolvers it needs from [`crate::resolve`]
//! 3. Formats and displays output

mod completion;
mod remotes;
mod resolve;
mod set_default;

pub use completion::{completion, write_completion};
pub use remotes::remotes;
pub use resolve::{resolve, resolve_from_git};
pub use set_default::set_default;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Resolve {
            repo,
            allow_ambiguous,
            json,
        } => resolve::resolve(ctx, repo, allow_ambiguous, json),
        Command::Remotes { json } => remotes::remotes(ctx, json),
        Command::SetDefault { repo, view, unset } => {
            set_default::set_default(ctx, repo, view, unset)
        }
        Command::Completion { shell } => completion::completion(shell),
    }
}
