//! Note model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a note record.
///
/// Only used to address update requests; the client never validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note attached to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub course_id: i64,
    /// Plain text shown in the note card
    pub text: String,
    /// Uploaded image file name, relative to the server's upload folder
    #[serde(default)]
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Label for the card header, e.g. `"2024-10-02 14:05"`.
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
