//! Simplynotes - a tiny note-taking library.
//!
//! This library provides the core functionality for the `sn` CLI tool:
//! appending notes, marking them done, and listing them from a single
//! JSON file on disk.

pub mod action_log;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod storage;

use std::path::Path;


/// Library-level error type for Simplynotes operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid index: {0:?} is not a non-negative integer")]
    InvalidIndex(String),

    #[error("Index {index} out of range: store has {len} note(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Could not determine home directory; set SIMPLYNOTES_DBPATH")]
    NoHomeDir,

    #[error("{path}: {source}")]
    AtPath {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Attach the file path an I/O or parse failure happened on.
    pub fn at_path(self, path: &Path) -> Self {
        Error::AtPath {
            path: path.display().to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error, with any path context stripped.
    pub fn root(&self) -> &Error {
        match self {
            Error::AtPath { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for Simplynotes operations.
pub type Result<T> = std::result::Result<T, Error>;
