//! set-default command - Choose the remote used as the default base repository

use anyhow::{anyhow, bail, Context as _, Result};

use crate::cli::Context;
use crate::core::types::RepoId;
use crate::resolve::ResolveError;
use crate::ui::output;

use super::resolve::resolve_from_git;

/// View, set or clear the default base repository.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `repo` - Repository to mark; prompts among remotes when omitted
/// * `view` - Print the current default instead of changing it
/// * `unset` - Remove the default
pub fn set_default(ctx: &Context, repo: Option<RepoId>, view: bool, unset: bool) -> Result<()> {
    let git = ctx.open_git()?;

    if view {
        let remotes = git.remotes()?;
        let Some(remote) = remotes.resolved_remote() else {
            bail!("no default repository has been set; run 'baserepo set-default OWNER/REPO'");
        };
        output::result(String::from(remote.repo.clone()));
        return Ok(());
    }

    if unset {
        git.clear_resolved()?;
        output::print("Unset default repository", ctx.verbosity);
        return Ok(());
    }

    let target = match repo {
        Some(repo) => repo,
        None => resolve_from_git(&git, true, ctx.interactive).map_err(|err| match err {
            ResolveError::Ambiguous(_) => anyhow!(
                "multiple remotes detected; pass OWNER/REPO or run interactively to choose one"
            ),
            other => anyhow::Error::new(other),
        })?,
    };

    let remotes = git.remotes()?;
    let remote = remotes
        .find_by_repo(&target)
        .ok_or_else(|| anyhow!("{} does not match any git remote", target))?;

    git.set_resolved(&remote.name)
        .with_context(|| format!("Failed to mark remote '{}' as default", remote.name))?;
    output::print(
        format!("Set {} ({}) as the default repository", target, remote.name),
        ctx.verbosity,
    );

    Ok(())
}
