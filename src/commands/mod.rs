//! Command implementations for Simplynotes CLI.
//!
//! Each function loads the store from the configured path, runs one
//! [`NoteStore`] operation, persists if it mutated anything, and returns a
//! value that `main` prints as either JSON or human-readable lines. `done`
//! instead hands its listing to a callback before it saves.

use crate::Result;
use crate::config::NotesConfig;
use crate::models::Note;
use crate::storage::{NoteStore, parse_index};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output. An empty string prints nothing.
    fn to_human(&self) -> String;
}

/// One note as shown in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub index: usize,
    pub content: String,
    pub done: bool,
    pub done_at: Option<DateTime<Utc>>,
}

impl NoteView {
    fn from_note(index: usize, note: &Note) -> Self {
        Self {
            index,
            content: note.content.clone(),
            done: note.done,
            done_at: note.completed_at(),
        }
    }
}

/// Full listing of the store, produced by `list` and `done`.
#[derive(Debug, Clone, Serialize)]
pub struct NoteListing {
    pub notes: Vec<NoteView>,
    #[serde(skip)]
    lines: Vec<String>,
}

impl NoteListing {
    pub fn from_store(store: &NoteStore) -> Self {
        Self {
            notes: store
                .notes()
                .iter()
                .enumerate()
                .map(|(index, note)| NoteView::from_note(index, note))
                .collect(),
            lines: store.list(),
        }
    }

    /// The human-readable listing lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Output for NoteListing {
    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }

    fn to_human(&self) -> String {
        self.lines.join("\n")
    }
}

/// Result of `add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteAdded {
    pub index: usize,
    pub content: String,
}

impl Output for NoteAdded {
    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }

    fn to_human(&self) -> String {
        String::new()
    }
}

/// Print every note. Read-only.
pub fn list(config: &NotesConfig) -> Result<NoteListing> {
    let store = NoteStore::load(config.db_path())?;
    Ok(NoteListing::from_store(&store))
}

/// Mark the note at `index` done, hand the updated listing to `emit`, then
/// persist.
///
/// The listing is emitted before saving, so it still shows up when the save
/// fails. A bad or out-of-range index fails before anything is emitted or
/// written.
pub fn done<F>(config: &NotesConfig, index: &str, emit: F) -> Result<NoteListing>
where
    F: FnOnce(&NoteListing),
{
    let mut store = NoteStore::load(config.db_path())?;
    let index = parse_index(index)?;
    store.complete(index)?;
    let listing = NoteListing::from_store(&store);
    emit(&listing);
    store.save(config.db_path())?;
    Ok(listing)
}

/// Append a note made of `words` joined by single spaces, and persist.
pub fn add(config: &NotesConfig, words: &[String]) -> Result<NoteAdded> {
    let mut store = NoteStore::load(config.db_path())?;
    let content = words.join(" ");
    let index = store.add(content.clone());
    store.save(config.db_path())?;
    Ok(NoteAdded { index, content })
}
