//! coursenotes-core - Core library for the course notes page
//!
//! This crate holds the view models behind the page (semester tabs, image
//! upload preview, inline note editing), the page content models, and the
//! HTTP client used to persist note edits. Nothing here depends on a
//! renderer, so the desktop app only has to draw state and forward events.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod preview;
pub mod tabs;

pub use api::{NoteUpdater, NotesApiClient};
pub use config::ClientConfig;
pub use editor::{NoteBoard, NoteMode, SaveOutcome, UserAlert};
pub use error::{Error, Result};
pub use models::{Course, Note, NoteId, PageData, SemesterId, SemesterPanel};
pub use preview::{ImagePreview, PreviewImage};
pub use tabs::SemesterTabs;
