//! Note card component with inline editing

use dioxus::prelude::*;

use coursenotes_core::{Error, NoteId, NoteMode, NoteUpdater, SaveOutcome};

use crate::services::show_alert;
use crate::state::AppState;

/// A single note: static text while viewing, a text area while editing.
#[component]
pub fn NoteCard(note_id: NoteId) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let Some(card) = state.board.read().card(note_id).cloned() else {
        return rsx! {};
    };
    let created = card.note.created_label();
    let image_url = card
        .note
        .image_path
        .as_deref()
        .and_then(|path| state.upload_url(path));

    let on_edit = move |_| {
        let result = state.board.write().edit_note(note_id).map(|_| ());
        if let Err(e) = result {
            tracing::warn!("Failed to start editing: {}", e);
        }
    };

    let on_input = move |evt: Event<FormData>| {
        if let Err(e) = state.board.write().update_draft(note_id, evt.value()) {
            tracing::warn!("Dropped draft change: {}", e);
        }
    };

    let on_save = move |_| {
        let ticket = match state.board.write().begin_save(note_id) {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::debug!("Save not started: {}", e);
                return;
            }
        };
        let client = state.api_client.read().clone();
        let mut board = state.board;

        spawn(async move {
            let result = match client {
                Some(client) => client.update_note(ticket.note_id, &ticket.text).await,
                None => Err(Error::Transport(
                    "notes server is not configured".to_string(),
                )),
            };

            let outcome = board.write().finish_save(ticket, result);
            if let SaveOutcome::Failed(alert) = outcome {
                show_alert(&alert).await;
            }
        });
    };

    let on_cancel = move |_| {
        if let Err(e) = state.board.write().cancel_edit(note_id) {
            tracing::warn!("Failed to cancel editing: {}", e);
        }
    };

    let button_style = format!(
        "padding: 4px 12px; border: 1px solid {}; border-radius: 4px; cursor: pointer; background: {}; color: {};",
        colors.border, colors.bg_secondary, colors.text_primary
    );

    rsx! {
        div {
            class: "note-card",
            style: "
                padding: 12px 16px;
                margin-bottom: 12px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
            ",

            div {
                class: "note-date",
                style: "font-size: 12px; color: {colors.text_muted}; margin-bottom: 6px;",
                "{created}"
            }

            {match card.mode {
                NoteMode::Viewing => rsx! {
                    div {
                        class: "note-text",
                        style: "white-space: pre-wrap; margin-bottom: 8px;",
                        "{card.note.text}"
                    }
                    button {
                        class: "edit-btn",
                        style: "{button_style}",
                        onclick: on_edit,
                        "Edit"
                    }
                },
                NoteMode::Editing(session) => rsx! {
                    div {
                        class: "edit-area",
                        textarea {
                            class: "note-textarea editing",
                            style: "
                                width: 100%;
                                min-height: 96px;
                                padding: 8px;
                                box-sizing: border-box;
                                border: 1px solid {colors.accent};
                                border-radius: 6px;
                                font-family: inherit;
                                font-size: inherit;
                                background: {colors.bg_secondary};
                                color: {colors.text_primary};
                            ",
                            value: "{session.draft}",
                            oninput: on_input,
                        }
                        div {
                            class: "edit-actions",
                            style: "display: flex; gap: 8px; margin-top: 8px;",
                            button {
                                class: "save-btn",
                                style: "{button_style}",
                                disabled: session.is_saving(),
                                onclick: on_save,
                                if session.is_saving() { "Saving..." } else { "Save" }
                            }
                            button {
                                class: "cancel-btn",
                                style: "{button_style}",
                                onclick: on_cancel,
                                "Cancel"
                            }
                        }
                    }
                },
            }}

            if let Some(url) = image_url {
                img {
                    class: "note-image",
                    style: "display: block; max-width: 100%; margin-top: 8px; border-radius: 6px;",
                    src: "{url}",
                }
            }
        }
    }
}
