//! Semester tab buttons and panels

use dioxus::prelude::*;

use coursenotes_core::{Course, SemesterId};

use crate::state::AppState;

/// Row of tab buttons, one per semester panel.
#[component]
pub fn SemesterTabBar() -> Element {
    let state = use_context::<AppState>();
    let tabs = (state.tabs)();

    rsx! {
        div {
            class: "semester-tabs",
            style: "display: flex; gap: 8px; margin-bottom: 12px;",

            for (index, button) in tabs.buttons().iter().enumerate() {
                TabButton {
                    key: "{button.semester}",
                    semester: button.semester.clone(),
                    label: button.label.clone(),
                    active: tabs.is_active(index),
                }
            }
        }
    }
}

#[component]
fn TabButton(semester: SemesterId, label: String, active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (bg, fg) = if active {
        (colors.accent, colors.accent_text)
    } else {
        (colors.bg_secondary, colors.text_secondary)
    };

    let show = move |_| {
        if let Err(e) = state.tabs.write().show_semester(&semester) {
            tracing::warn!("Failed to switch semester: {}", e);
        }
    };

    rsx! {
        button {
            class: if active { "tab-btn active" } else { "tab-btn" },
            style: "
                padding: 6px 14px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                cursor: pointer;
                background: {bg};
                color: {fg};
            ",
            onclick: show,
            "{label}"
        }
    }
}

/// Course lists for every semester; only the selected one is displayed.
#[component]
pub fn SemesterPanels() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let tabs = (state.tabs)();
    let semesters = (state.semesters)();

    if semesters.is_empty() {
        return rsx! {
            div {
                style: "color: {colors.text_muted};",
                "No semesters to show."
            }
        };
    }

    rsx! {
        for panel in semesters {
            div {
                key: "{panel.id}",
                id: "{panel.id}",
                class: "semester-content",
                style: if tabs.is_visible(&panel.id) { "display: block;" } else { "display: none;" },

                if panel.courses.is_empty() {
                    div {
                        style: "color: {colors.text_muted};",
                        "No courses in this semester."
                    }
                }
                for course in panel.courses.iter().cloned() {
                    CourseRow { key: "{course.id}", course }
                }
            }
        }
    }
}

#[component]
fn CourseRow(course: Course) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "course-row",
            style: "
                display: flex;
                justify-content: space-between;
                padding: 8px 0;
                border-bottom: 1px solid {colors.border};
            ",
            span { "{course.name}" }
            if course.is_elective() {
                span {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "Elective"
                }
            }
        }
    }
}
