//! resolve command - Print the base repository

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::RepoId;
use crate::git::Git;
use crate::resolve::{self, ResolveBaseRepo, ResolveError};
use crate::ui::output;
use crate::ui::prompts::TerminalPrompter;

#[derive(Debug, Serialize)]
struct ResolvedRepo<'a> {
    host: &'a str,
    owner: &'a str,
    name: &'a str,
}

/// Print the repository commands should operate against.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `repo` - Explicit override; remotes are not inspected
/// * `allow_ambiguous` - Fall back to the default remote instead of rejecting
/// * `json` - Emit JSON
pub fn resolve(ctx: &Context, repo: Option<RepoId>, allow_ambiguous: bool, json: bool) -> Result<()> {
    let resolved = match repo {
        Some(repo) => resolve::fixed(repo).resolve()?,
        None => {
            let git = ctx.open_git()?;
            let strict = !allow_ambiguous && ctx.config.require_unambiguous();
            resolve_from_git(&git, strict, ctx.interactive)?
        }
    };

    if json {
        let out = ResolvedRepo {
            host: resolved.host(),
            owner: resolved.owner(),
            name: resolved.name(),
        };
        output::result(serde_json::to_string_pretty(&out)?);
    } else {
        output::result(String::from(resolved));
    }

    Ok(())
}

/// Resolve the base repository from the remotes of `git`.
///
/// With `strict`, more than one remote is ambiguous; with `interactive`,
/// ambiguity is settled by prompting on the terminal.
pub fn resolve_from_git(git: &Git, strict: bool, interactive: bool) -> Result<RepoId, ResolveError> {
    let remotes = || git.remotes().map_err(ResolveError::from);

    let base: Box<dyn Fn() -> Result<RepoId, ResolveError> + '_> = if strict {
        let strict = resolve::require_no_ambiguity(resolve::from_remotes(remotes), remotes);
        Box::new(move || strict.resolve())
    } else {
        let lenient = resolve::from_remotes(remotes);
        Box::new(move || lenient.resolve())
    };

    let prompter = interactive.then(|| TerminalPrompter::new(true));
    resolve::prompt_when_ambiguous(base, prompter).resolve()
}
