//! Configuration for Simplynotes.
//!
//! The only setting is where the notes database lives:
//!
//! 1. `--db <path>` CLI flag
//! 2. `SIMPLYNOTES_DBPATH` environment variable (empty counts as unset)
//! 3. `~/.simplynotes.json`
//!
//! Use [`resolve_config`] to get a [`NotesConfig`] and pass it explicitly to
//! the command layer. Nothing below `main` reads the environment.

pub mod resolver;

pub use resolver::{
    ConfigOverrides, DB_PATH_ENV, DEFAULT_DB_FILE, NotesConfig, Resolved, ValueSource,
    resolve_config, resolve_config_with_env,
};
