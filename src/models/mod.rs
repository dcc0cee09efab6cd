//! Data models for Simplynotes.
//!
//! A [`Note`] is a single free-text entry with a completion flag. Its JSON
//! shape is fixed by existing database files:
//!
//! ```json
//! { "content": "buy milk", "done": true, "done_ts": 1700000000 }
//! ```
//!
//! `done_ts` is whole seconds since the Unix epoch, with `0` meaning "never
//! completed".

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Format used when rendering completion times for humans.
pub const DONE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single user-authored note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Free text of the note
    #[serde(default)]
    pub content: String,

    /// Whether the note has been completed
    #[serde(default)]
    pub done: bool,

    /// When the note was completed (second precision)
    #[serde(rename = "done_ts", default, with = "epoch_seconds")]
    pub done_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Create a new, incomplete note.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
            done_at: None,
        }
    }

    /// Completion time, only if the note is actually done.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        if self.done { self.done_at } else { None }
    }

    /// Mark the note done at `when`, truncated to whole seconds.
    ///
    /// Completing an already-done note refreshes the timestamp.
    pub fn complete(&mut self, when: DateTime<Utc>) {
        self.done = true;
        self.done_at = DateTime::from_timestamp(when.timestamp(), 0);
    }

    /// Render the note as a listing line: `<index>: [DONE <time>] <content>`.
    ///
    /// The completion time is shown in the local time zone.
    pub fn render(&self, index: usize) -> String {
        if !self.done {
            return format!("{}: {}", index, self.content);
        }
        // A done note with no timestamp renders the epoch, like a zero done_ts would.
        let at = self.completed_at().unwrap_or_default();
        format!(
            "{}: [DONE {}] {}",
            index,
            at.with_timezone(&Local).format(DONE_TIME_FORMAT),
            self.content
        )
    }
}

/// Serde adapter mapping `Option<DateTime<Utc>>` to integer epoch seconds,
/// where `0` (or `null`) stands for `None`.
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.map(|t| t.timestamp()).unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)?.unwrap_or(0) {
            0 => Ok(None),
            secs => DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("done_ts out of range: {}", secs))),
        }
    }
}
