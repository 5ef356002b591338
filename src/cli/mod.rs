//! cli
//!
//! Command-line interface layer for baserepo.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a [`Context`]
//! and dispatches to [`commands`]. Resolution policy lives in
//! [`crate::resolve`]; handlers only choose which policies to compose.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::git::Git;
use crate::ui::output::{self, Verbosity};

/// Execution context shared by command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory to operate in
    pub cwd: PathBuf,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Whether prompts may be shown
    pub interactive: bool,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Open the repository containing `cwd`.
    pub fn open_git(&self) -> Result<Git> {
        Git::open(&self.cwd).context("Failed to open repository")
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let cwd = match &cli.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    // Repo-scoped config is optional; outside a repository only global config applies.
    let git_dir = Git::open(&cwd).ok().map(|git| git.git_dir().to_path_buf());
    let config = Config::load(git_dir.as_deref()).context("Failed to load configuration")?;

    output::init_logging(verbosity, config.log_filter());
    tracing::debug!(cwd = %cwd.display(), "starting");
    tracing::debug!(
        global = ?config.global_config_loaded_from(),
        repo = ?config.repo_config_loaded_from(),
        "configuration loaded"
    );

    let ctx = Context {
        cwd,
        verbosity,
        interactive: cli.interactive(config.interactive()),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}
