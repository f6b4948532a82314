//! Main application component

use dioxus::prelude::*;

use coursenotes_core::preview::PREVIEW_STYLESHEET;
use coursenotes_core::{ImagePreview, NoteBoard, SemesterTabs};

use crate::services::bootstrap_from_env;
use crate::state::AppState;
use crate::theme::theme_from_env;
use crate::views::CoursePage;

/// Root application component
#[component]
pub fn App() -> Element {
    let mut semesters = use_signal(Vec::new);
    let mut tabs = use_signal(SemesterTabs::default);
    let mut board = use_signal(NoteBoard::default);
    let preview = use_signal(ImagePreview::default);
    let mut api_client = use_signal(|| None);
    let mut load_error = use_signal(|| None::<String>);
    let theme = use_signal(theme_from_env);
    let mut initialized = use_signal(|| false);

    // Load configuration and page content once
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);

        match bootstrap_from_env() {
            Ok(ready) => {
                tabs.set(ready.tabs);
                board.set(NoteBoard::new(ready.page.notes));
                semesters.set(ready.page.semesters);
                api_client.set(Some(ready.api_client));
            }
            Err(e) => {
                tracing::error!("Failed to prepare page: {}", e);
                load_error.set(Some(e.to_string()));
            }
        }
    });

    use_context_provider(|| AppState {
        semesters,
        tabs,
        board,
        preview,
        api_client,
        load_error,
        theme,
    });

    let colors = theme().palette();

    rsx! {
        // Preview thumbnail rule, injected once for the whole page
        style { "{PREVIEW_STYLESHEET}" }

        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            CoursePage {}
        }
    }
}
