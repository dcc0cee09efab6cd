//! Storage layer for Simplynotes data.
//!
//! All notes live in a single JSON file which is read in full at startup and
//! rewritten in full after a mutation:
//!
//! ```json
//! { "notes": [ { "content": "...", "done": false, "done_ts": 0 } ] }
//! ```
//!
//! There is no locking. Two processes writing the same file race and the
//! last writer wins. Saving truncates the file before writing, so a crash
//! mid-write can leave it corrupt.

use crate::models::Note;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Ordered, index-addressed collection of notes backed by one JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStore {
    #[serde(default, deserialize_with = "null_as_empty")]
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store. Nothing is written until [`NoteStore::save`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse the database at `path`.
    ///
    /// A missing file is an error: the database must already exist with at
    /// least `{"notes":[]}` in it.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::from(e).at_path(path))?;
        let store: NoteStore =
            serde_json::from_slice(&bytes).map_err(|e| Error::from(e).at_path(path))?;
        tracing::debug!(path = %path.display(), notes = store.len(), "loaded notes");
        Ok(store)
    }

    /// Serialize the whole store and overwrite `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec(self)?;
        fs::write(path, json).map_err(|e| Error::from(e).at_path(path))?;
        tracing::debug!(path = %path.display(), notes = self.len(), "saved notes");
        Ok(())
    }

    /// Listing lines in store order, e.g. `0: [DONE 2024-01-02 03:04:05] buy milk`.
    pub fn list(&self) -> Vec<String> {
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| note.render(index))
            .collect()
    }

    /// Append a new incomplete note. Returns its index.
    pub fn add(&mut self, text: impl Into<String>) -> usize {
        self.notes.push(Note::new(text));
        let index = self.notes.len() - 1;
        tracing::debug!(index, "added note");
        index
    }

    /// Mark the note at `index` done as of now.
    pub fn complete(&mut self, index: usize) -> Result<&Note> {
        self.complete_at(index, Utc::now())
    }

    /// Mark the note at `index` done as of `when`.
    ///
    /// Fails without touching the store if `index` is out of range.
    pub fn complete_at(&mut self, index: usize, when: DateTime<Utc>) -> Result<&Note> {
        let len = self.notes.len();
        let note = self
            .notes
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        note.complete(when);
        tracing::debug!(index, "completed note");
        Ok(&*note)
    }

    /// Notes in store order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Note at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Parse a user-supplied note index.
///
/// Plain decimal digits with an optional leading `+`. Whitespace, signs
/// other than `+`, and anything else non-numeric are rejected.
pub fn parse_index(text: &str) -> Result<usize> {
    text.parse::<usize>()
        .map_err(|_| Error::InvalidIndex(text.to_string()))
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Note>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Note>>::deserialize(deserializer)?.unwrap_or_default())
}
