//! Application state management
//!
//! Global state accessible via Dioxus context providers. Each behavior of the
//! page owns one view model; components read it and send edits back through
//! its methods.

use std::sync::Arc;

use dioxus::prelude::*;

use coursenotes_core::{ImagePreview, NoteBoard, NotesApiClient, SemesterPanel, SemesterTabs};

use crate::theme::ResolvedTheme;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Semester panels with their courses
    pub semesters: Signal<Vec<SemesterPanel>>,
    /// Which panel is visible and which tab is active
    pub tabs: Signal<SemesterTabs>,
    /// Note cards and their edit sessions
    pub board: Signal<NoteBoard>,
    /// Upload form image preview
    pub preview: Signal<ImagePreview>,
    /// Notes server client, absent when startup failed
    pub api_client: Signal<Option<Arc<NotesApiClient>>>,
    /// Startup error for display
    pub load_error: Signal<Option<String>>,
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// URL of an uploaded note image on the notes server.
    #[must_use]
    pub fn upload_url(&self, image_path: &str) -> Option<String> {
        self.api_client
            .read()
            .as_ref()
            .map(|client| format!("{}/static/uploads/{image_path}", client.base_url()))
    }
}
