//! Note list component

use dioxus::prelude::*;

use super::note_card::NoteCard;
use crate::state::AppState;

#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let note_ids: Vec<_> = state
        .board
        .read()
        .cards()
        .iter()
        .map(|card| card.note.id)
        .collect();
    let is_empty = note_ids.is_empty();

    rsx! {
        div {
            class: "note-list",

            if is_empty {
                div {
                    class: "empty-state",
                    style: "color: {colors.text_muted};",
                    "No notes yet"
                }
            }

            for note_id in note_ids {
                NoteCard { key: "{note_id}", note_id }
            }
        }
    }
}
