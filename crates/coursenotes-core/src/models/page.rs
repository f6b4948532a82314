//! Page content document

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Note, SemesterPanel};
use crate::Result;

/// Everything the page controller attaches to: semester panels and note cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub semesters: Vec<SemesterPanel>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl PageData {
    /// Parse a page document from JSON text.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Read and parse a page document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        let page = Self::from_json(&payload)?;
        tracing::debug!(
            "Loaded page data from {}: {} semesters, {} notes",
            path.display(),
            page.semesters.len(),
            page.notes.len()
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{NoteId, SemesterId};
    use crate::Error;

    const PAGE_JSON: &str = r#"{
        "semesters": [
            {"id": "Fall", "courses": [
                {"id": 1, "year": 1, "semester": "Fall", "name": "MATH 1131 - CALCULUS I"}
            ]},
            {"id": "Spring", "label": "Spring Term"}
        ],
        "notes": [
            {"id": 5, "course_id": 1, "text": "Limits", "image_path": "20241002_140500_board.png",
             "created_at": "2024-10-02T11:05:00Z"}
        ]
    }"#;

    #[test]
    fn parses_page_document() {
        let page = PageData::from_json(PAGE_JSON).unwrap();

        assert_eq!(page.semesters.len(), 2);
        assert_eq!(page.semesters[0].id, SemesterId::from("Fall"));
        assert_eq!(page.semesters[0].courses[0].name, "MATH 1131 - CALCULUS I");
        assert_eq!(page.semesters[1].button_label(), "Spring Term");
        assert_eq!(page.notes[0].id, NoteId::new(5));
    }

    #[test]
    fn empty_document_is_an_empty_page() {
        assert_eq!(PageData::from_json("{}").unwrap(), PageData::default());
    }

    #[test]
    fn loads_page_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PAGE_JSON.as_bytes()).unwrap();

        let page = PageData::load(file.path()).unwrap();
        assert_eq!(page.notes[0].text, "Limits");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PageData::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
