//! remotes command - List remotes and the repositories they point at

use anyhow::Result;

use crate::cli::Context;
use crate::core::remotes::Remotes;
use crate::ui::output;

/// List remotes, marking the default base repository.
pub fn remotes(ctx: &Context, json: bool) -> Result<()> {
    let git = ctx.open_git()?;
    let remotes = git.remotes()?;

    if json {
        output::result(serde_json::to_string_pretty(&remotes)?);
        return Ok(());
    }

    if remotes.is_empty() {
        output::warn("no git remotes point at a known repository", ctx.verbosity);
        return Ok(());
    }

    output::result(format_remotes(&remotes));
    Ok(())
}

/// One line per remote: `name<TAB>repo`, with ` (default)` on the resolved one.
fn format_remotes(remotes: &Remotes) -> String {
    let resolved = remotes.resolved_remote().map(|r| r.name.as_str());
    remotes
        .iter()
        .map(|r| {
            let marker = if Some(r.name.as_str()) == resolved {
                " (default)"
            } else {
                ""
            };
            format!("{}\t{}{}", r.name, String::from(r.repo.clone()), marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
