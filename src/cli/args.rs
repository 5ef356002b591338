//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::RepoId;
use crate::ui::prompts::TerminalPrompter;

/// baserepo - Resolve the base repository for a working copy
#[derive(Parser, Debug)]
#[command(name = "baserepo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if baserepo was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Interactive mode requested by flags, if any.
    ///
    /// Returns `Some(true)` for `--interactive`, `Some(false)` for
    /// `--no-interactive` or `--quiet`, and `None` when the config and the
    /// terminal should decide.
    pub fn interactive_override(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet {
            Some(false)
        } else {
            None
        }
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Flags win over `configured`. Either way prompts require a terminal,
    /// so `--interactive` without one falls back to non-interactive.
    pub fn interactive(&self, configured: bool) -> bool {
        self.interactive_override().unwrap_or(configured) && TerminalPrompter::is_tty()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the repository commands should operate against
    #[command(
        name = "resolve",
        long_about = "Print the repository commands should operate against.\n\n\
            With a single remote, that remote's repository is printed. With more \
            than one remote the choice is ambiguous: in interactive mode you are \
            asked to pick one, otherwise the command fails and asks for --repo.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Resolve from the configured remotes
    baserepo resolve

    # Skip remote inspection entirely
    baserepo resolve -R owner/repo

    # Machine-readable output
    baserepo resolve --json"
    )]
    Resolve {
        /// Use this repository instead of inspecting remotes
        #[arg(short = 'R', long = "repo", value_name = "[HOST/]OWNER/REPO")]
        repo: Option<RepoId>,

        /// Pick the default remote instead of rejecting multiple remotes
        #[arg(long)]
        allow_ambiguous: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List remotes and the repositories they point at
    Remotes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Choose the remote used as the default base repository
    #[command(
        name = "set-default",
        after_help = "\
WORKFLOW EXAMPLES:
    # Mark the remote pointing at owner/repo as the default
    baserepo set-default owner/repo

    # Show the current default
    baserepo set-default --view

    # Forget the default
    baserepo set-default --unset"
    )]
    SetDefault {
        /// Repository to mark as default; prompts when omitted
        #[arg(value_name = "[HOST/]OWNER/REPO", conflicts_with_all = ["view", "unset"])]
        repo: Option<RepoId>,

        /// Show the current default
        #[arg(long, conflicts_with = "unset")]
        view: bool,

        /// Remove the default
        #[arg(long)]
        unset: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repo_override() {
        let cli = Cli::try_parse_from(["baserepo", "resolve", "-R", "owner/repo"]).unwrap();
        match cli.command {
            Command::Resolve { repo, .. } => {
                assert_eq!(repo, Some(RepoId::new("owner", "repo").unwrap()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_repo() {
        let result = Cli::try_parse_from(["baserepo", "resolve", "--repo", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_disables_interaction() {
        let cli = Cli::try_parse_from(["baserepo", "-q", "remotes"]).unwrap();
        assert_eq!(cli.interactive_override(), Some(false));
        assert!(!cli.interactive(true));
    }

    #[test]
    fn interactive_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["baserepo", "--interactive", "remotes"]).unwrap();
        assert_eq!(cli.interactive_override(), Some(true));
        assert_eq!(cli.interactive(false), TerminalPrompter::is_tty());
    }

    #[test]
    fn no_interactive_flag_wins_over_config() {
        let cli = Cli::try_parse_from(["baserepo", "--no-interactive", "remotes"]).unwrap();
        assert!(!cli.interactive(true));
    }

    #[test]
    fn interactive_flags_conflict() {
        let result =
            Cli::try_parse_from(["baserepo", "--interactive", "--no-interactive", "remotes"]);
        assert!(result.is_err());
    }

    #[test]
    fn set_default_view_conflicts_with_repo() {
        let result = Cli::try_parse_from(["baserepo", "set-default", "owner/repo", "--view"]);
        assert!(result.is_err());
    }
}
