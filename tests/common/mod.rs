//! Common test utilities for simplynotes integration tests.
//!
//! Provides `TestEnv` for isolated test environments that never touch the
//! user's `~/.simplynotes.json`.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated notes database.
///
/// The `sn()` method returns a `Command` that sets `SIMPLYNOTES_DBPATH`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with no database file.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Create a new test environment with an empty `{"notes":[]}` database.
    pub fn init() -> Self {
        let env = Self::new();
        env.write_db(r#"{"notes":[]}"#);
        env
    }

    /// Get a Command for the sn binary pointed at this environment's database.
    pub fn sn(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sn"));
        cmd.current_dir(self.dir.path());
        cmd.env("SIMPLYNOTES_DBPATH", self.db_path());
        cmd.env("HOME", self.dir.path());
        cmd.env_remove("SIMPLYNOTES_ACTION_LOG");
        cmd.env_remove("SIMPLYNOTES_LOG");
        cmd
    }

    /// Path of the notes database.
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("notes.json")
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrite the database with raw contents.
    pub fn write_db(&self, contents: &str) {
        std::fs::write(self.db_path(), contents).unwrap();
    }

    /// Raw database contents.
    pub fn read_db(&self) -> String {
        std::fs::read_to_string(self.db_path()).unwrap()
    }

    /// Parsed database contents.
    pub fn db_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_db()).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
