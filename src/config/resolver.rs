//! Precedence resolution for the notes database path.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI flag (`--db`)
//! 2. `SIMPLYNOTES_DBPATH` environment variable
//! 3. `.simplynotes.json` in the user's home directory

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "SIMPLYNOTES_DBPATH";

/// File name of the default database, relative to the home directory.
pub const DEFAULT_DB_FILE: &str = ".simplynotes.json";

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from environment variable
    EnvVar(String),
    /// Value from CLI flag
    CliFlag,
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::EnvVar(name) => write!(f, "env:{}", name),
            ValueSource::CliFlag => write!(f, "cli"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Create a new resolved value.
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Values supplied on the command line, taking precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Location of the notes database
    pub db_path: Resolved<PathBuf>,
}

impl NotesConfig {
    /// Path of the notes database.
    pub fn db_path(&self) -> &Path {
        &self.db_path.value
    }
}

/// Resolve configuration against the process environment.
pub fn resolve_config(overrides: ConfigOverrides) -> Result<NotesConfig> {
    resolve_config_with_env(overrides, |name| std::env::var(name).ok(), dirs::home_dir)
}

/// Resolve configuration with injected environment and home-directory lookups.
pub fn resolve_config_with_env<E, H>(
    overrides: ConfigOverrides,
    env: E,
    home_dir: H,
) -> Result<NotesConfig>
where
    E: Fn(&str) -> Option<String>,
    H: FnOnce() -> Option<PathBuf>,
{
    let db_path = if let Some(path) = overrides.db_path {
        Resolved::new(path, ValueSource::CliFlag)
    } else if let Some(path) = env(DB_PATH_ENV).filter(|v| !v.is_empty()) {
        Resolved::new(
            PathBuf::from(path),
            ValueSource::EnvVar(DB_PATH_ENV.to_string()),
        )
    } else {
        let home = home_dir().ok_or(Error::NoHomeDir)?;
        Resolved::new(home.join(DEFAULT_DB_FILE), ValueSource::Default)
    };

    tracing::debug!(path = %db_path.value.display(), source = %db_path.source, "resolved database path");
    Ok(NotesConfig { db_path })
}
