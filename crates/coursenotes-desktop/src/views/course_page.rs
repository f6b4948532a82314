//! Course page view - the only screen of the application

use dioxus::prelude::*;

use crate::components::{ImageUpload, NoteList, SemesterPanels, SemesterTabBar};
use crate::state::AppState;

#[component]
pub fn CoursePage() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "course-page",
            style: "max-width: 960px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 24px;",

            if let Some(error) = (state.load_error)() {
                div {
                    class: "load-error",
                    style: "
                        padding: 12px 16px;
                        border: 1px solid {colors.error};
                        border-radius: 6px;
                        color: {colors.error};
                    ",
                    "{error}"
                }
            }

            section {
                class: "semesters",
                SemesterTabBar {}
                SemesterPanels {}
            }

            section {
                class: "image-preview-form",
                h2 { style: "font-size: 16px; margin: 0 0 8px 0;", "Image preview" }
                ImageUpload {}
            }

            section {
                class: "notes",
                h2 { style: "font-size: 16px; margin: 0 0 8px 0;", "Notes" }
                NoteList {}
            }
        }
    }
}
