//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$BASEREPO_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/baserepo/config.toml`
//! 3. `~/.baserepo/config.toml`
//!
//! # Repo Config
//!
//! Located at `<git-dir>/baserepo/config.toml`.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// interactive = true
/// log = "baserepo=debug"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default interactive mode
    pub interactive: Option<bool>,

    /// Log filter directive, in `EnvFilter` syntax
    pub log: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(log) = &self.log {
            if log.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "log filter cannot be empty".to_string(),
                ));
            }
            EnvFilter::try_new(log).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid log filter '{}': {}", log, e))
            })?;
        }
        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// require_unambiguous = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Reject (or prompt on) working copies with more than one remote
    pub require_unambiguous: Option<bool>,
}

impl RepoConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}
