//! Semester panels and their courses

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque label naming a semester panel and its tab button.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemesterId(String);

impl SemesterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SemesterId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for SemesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A course listed inside a semester panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub year: u8,
    pub semester: String,
    pub name: String,
}

impl Course {
    /// Elective placeholders can be renamed by the student.
    #[must_use]
    pub fn is_elective(&self) -> bool {
        self.name.to_uppercase().contains("ELECTIVE")
    }
}

/// One content panel together with the label of its tab button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterPanel {
    pub id: SemesterId,
    /// Button text; falls back to the id when absent
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl SemesterPanel {
    #[must_use]
    pub fn button_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}
