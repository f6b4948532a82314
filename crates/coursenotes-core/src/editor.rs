//! Inline note editing.
//!
//! Every note card is either viewing its text or editing a draft of it.
//! Saving is split in two so the caller can await the network write without
//! holding the board: [`NoteBoard::begin_save`] marks the session in flight
//! and hands out a [`SaveTicket`], [`NoteBoard::finish_save`] applies the
//! server's answer.
//!
//! Each session carries a generation number and tickets remember it, so a
//! reply that arrives after its session was cancelled never closes or
//! unlocks a session opened later.

use crate::models::{Note, NoteId};
use crate::{Error, Result};

/// Shown to the user when a save does not go through.
pub const SAVE_ERROR_MESSAGE: &str = "An error occurred while updating the note!";

/// Draft state for one card between "edit" and "save or cancel"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub draft: String,
    saving: bool,
    generation: u64,
}

impl EditSession {
    pub const fn is_saving(&self) -> bool {
        self.saving
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NoteMode {
    #[default]
    Viewing,
    Editing(EditSession),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub note: Note,
    pub mode: NoteMode,
}

impl NoteCard {
    pub const fn session(&self) -> Option<&EditSession> {
        match &self.mode {
            NoteMode::Viewing => None,
            NoteMode::Editing(session) => Some(session),
        }
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, NoteMode::Editing(_))
    }
}

/// Text snapshot sent with one update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub note_id: NoteId,
    pub text: String,
    generation: u64,
}

/// Blocking, user-visible failure notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAlert {
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(UserAlert),
}

/// All note cards on the page, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBoard {
    cards: Vec<NoteCard>,
    last_generation: u64,
}

impl NoteBoard {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            cards: notes
                .into_iter()
                .map(|note| NoteCard {
                    note,
                    mode: NoteMode::Viewing,
                })
                .collect(),
            last_generation: 0,
        }
    }

    pub fn cards(&self) -> &[NoteCard] {
        &self.cards
    }

    pub fn card(&self, id: NoteId) -> Option<&NoteCard> {
        self.cards.iter().find(|card| card.note.id == id)
    }

    fn card_mut(&mut self, id: NoteId) -> Result<&mut NoteCard> {
        self.cards
            .iter_mut()
            .find(|card| card.note.id == id)
            .ok_or(Error::NoteNotFound(id))
    }

    /// Switch a card into editing, with the draft pre-filled from its text.
    ///
    /// A card that is already editing keeps its current session.
    pub fn edit_note(&mut self, id: NoteId) -> Result<&EditSession> {
        let generation = self.last_generation + 1;
        let card = self.card_mut(id)?;
        if !card.is_editing() {
            card.mode = NoteMode::Editing(EditSession {
                draft: card.note.text.clone(),
                saving: false,
                generation,
            });
            self.last_generation = generation;
        }

        let card = self.card_mut(id)?;
        match &card.mode {
            NoteMode::Editing(session) => Ok(session),
            NoteMode::Viewing => Err(Error::NotEditing(id)),
        }
    }

    pub fn update_draft(&mut self, id: NoteId, draft: impl Into<String>) -> Result<()> {
        match &mut self.card_mut(id)?.mode {
            NoteMode::Editing(session) => {
                session.draft = draft.into();
                Ok(())
            }
            NoteMode::Viewing => Err(Error::NotEditing(id)),
        }
    }

    /// Mark the card's session in flight and snapshot the draft to send.
    pub fn begin_save(&mut self, id: NoteId) -> Result<SaveTicket> {
        match &mut self.card_mut(id)?.mode {
            NoteMode::Editing(session) if session.saving => Err(Error::SaveInFlight(id)),
            NoteMode::Editing(session) => {
                session.saving = true;
                Ok(SaveTicket {
                    note_id: id,
                    text: session.draft.clone(),
                    generation: session.generation,
                })
            }
            NoteMode::Viewing => Err(Error::NotEditing(id)),
        }
    }

    /// Reconcile the board with the result of an update request.
    ///
    /// On success the card shows the saved text and leaves editing. On
    /// failure the session stays open for another attempt and one alert is
    /// returned for the user. Either way, a session other than the one the
    /// ticket was issued for is left untouched.
    pub fn finish_save(&mut self, ticket: SaveTicket, result: Result<()>) -> SaveOutcome {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.note.id == ticket.note_id);

        match result {
            Ok(()) => {
                tracing::debug!("Saved note {}", ticket.note_id);
                if let Some(card) = card {
                    card.note.text = ticket.text;
                    if card
                        .session()
                        .is_some_and(|session| session.generation == ticket.generation)
                    {
                        card.mode = NoteMode::Viewing;
                    }
                } else {
                    tracing::warn!("Saved note {} is no longer on the board", ticket.note_id);
                }
                SaveOutcome::Saved
            }
            Err(error) => {
                tracing::error!("Failed to save note {}: {}", ticket.note_id, error);
                if let Some(NoteCard {
                    mode: NoteMode::Editing(session),
                    ..
                }) = card
                {
                    if session.generation == ticket.generation {
                        session.saving = false;
                    }
                }
                SaveOutcome::Failed(UserAlert {
                    message: SAVE_ERROR_MESSAGE.to_string(),
                    detail: error.to_string(),
                })
            }
        }
    }

    /// Drop the draft and show the unchanged text again.
    pub fn cancel_edit(&mut self, id: NoteId) -> Result<()> {
        let card = self.card_mut(id)?;
        if !card.is_editing() {
            return Err(Error::NotEditing(id));
        }
        card.mode = NoteMode::Viewing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::NoteUpdater;

    /// Update stub that counts calls and answers with a fixed result.
    struct StubUpdater {
        calls: AtomicUsize,
        accept: bool,
    }

    impl StubUpdater {
        fn new(accept: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                accept,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl NoteUpdater for StubUpdater {
        async fn update_note(&self, _id: NoteId, _text: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.accept {
                Ok(())
            } else {
                Err(Error::Rejected {
                    status: 200,
                    reason: "note not found".to_string(),
                })
            }
        }
    }

    fn board() -> NoteBoard {
        NoteBoard::new(vec![
            Note {
                id: NoteId::new(1),
                course_id: 10,
                text: "Original note".to_string(),
                image_path: None,
                created_at: Utc::now(),
            },
            Note {
                id: NoteId::new(2),
                course_id: 10,
                text: "Other note".to_string(),
                image_path: None,
                created_at: Utc::now(),
            },
        ])
    }

    async fn save(board: &mut NoteBoard, updater: &StubUpdater, id: NoteId) -> SaveOutcome {
        let ticket = board.begin_save(id).unwrap();
        let result = updater.update_note(ticket.note_id, &ticket.text).await;
        board.finish_save(ticket, result)
    }

    #[test]
    fn edit_prefills_draft_with_exact_text() {
        let mut board = board();

        let session = board.edit_note(NoteId::new(1)).unwrap();

        assert_eq!(session.draft, "Original note");
        assert!(board.card(NoteId::new(1)).unwrap().is_editing());
        assert!(!board.card(NoteId::new(2)).unwrap().is_editing());
    }

    #[test]
    fn editing_twice_keeps_single_session() {
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "half typed").unwrap();

        let session = board.edit_note(NoteId::new(1)).unwrap();

        assert_eq!(session.draft, "half typed");
    }

    #[tokio::test]
    async fn cancel_restores_text_without_network() {
        let updater = StubUpdater::new(true);
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "Scratch").unwrap();

        board.cancel_edit(NoteId::new(1)).unwrap();

        let card = board.card(NoteId::new(1)).unwrap();
        assert_eq!(card.mode, NoteMode::Viewing);
        assert_eq!(card.note.text, "Original note");
        assert_eq!(updater.calls(), 0);
    }

    #[tokio::test]
    async fn successful_save_updates_text_and_closes_editor() {
        let updater = StubUpdater::new(true);
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "Updated note").unwrap();

        let outcome = save(&mut board, &updater, NoteId::new(1)).await;

        assert_eq!(outcome, SaveOutcome::Saved);
        let card = board.card(NoteId::new(1)).unwrap();
        assert_eq!(card.note.text, "Updated note");
        assert_eq!(card.session(), None);
        assert_eq!(updater.calls(), 1);
    }

    #[tokio::test]
    async fn rejected_save_keeps_editor_and_alerts_once() {
        let updater = StubUpdater::new(false);
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "Updated note").unwrap();

        let outcome = save(&mut board, &updater, NoteId::new(1)).await;

        let SaveOutcome::Failed(alert) = outcome else {
            panic!("expected a failed save");
        };
        assert_eq!(alert.message, SAVE_ERROR_MESSAGE);
        assert!(alert.detail.contains("note not found"));

        let card = board.card(NoteId::new(1)).unwrap();
        let session = card.session().unwrap();
        assert_eq!(session.draft, "Updated note");
        assert!(!session.is_saving());
        assert_eq!(card.note.text, "Original note");
    }

    #[test]
    fn transport_failure_keeps_editor() {
        let mut board = board();
        board.edit_note(NoteId::new(2)).unwrap();
        let ticket = board.begin_save(NoteId::new(2)).unwrap();

        let outcome = board.finish_save(
            ticket,
            Err(Error::Transport("connection refused".to_string())),
        );

        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        assert!(board.card(NoteId::new(2)).unwrap().is_editing());
    }

    #[test]
    fn duplicate_save_is_suppressed_while_in_flight() {
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        let ticket = board.begin_save(NoteId::new(1)).unwrap();

        assert!(matches!(
            board.begin_save(NoteId::new(1)),
            Err(Error::SaveInFlight(_))
        ));

        board.finish_save(ticket, Err(Error::Transport("reset".to_string())));
        assert!(board.begin_save(NoteId::new(1)).is_ok());
    }

    #[test]
    fn save_after_cancel_still_applies_text() {
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "Sent before cancel").unwrap();
        let ticket = board.begin_save(NoteId::new(1)).unwrap();
        board.cancel_edit(NoteId::new(1)).unwrap();

        assert_eq!(board.finish_save(ticket, Ok(())), SaveOutcome::Saved);

        let card = board.card(NoteId::new(1)).unwrap();
        assert_eq!(card.note.text, "Sent before cancel");
        assert!(!card.is_editing());
    }

    #[test]
    fn late_success_keeps_session_opened_after_cancel() {
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "first").unwrap();
        let first = board.begin_save(NoteId::new(1)).unwrap();
        board.cancel_edit(NoteId::new(1)).unwrap();
        board.edit_note(NoteId::new(1)).unwrap();
        board.update_draft(NoteId::new(1), "second draft being typed").unwrap();

        assert_eq!(board.finish_save(first, Ok(())), SaveOutcome::Saved);

        let card = board.card(NoteId::new(1)).unwrap();
        assert_eq!(card.note.text, "first");
        assert_eq!(card.session().unwrap().draft, "second draft being typed");
    }

    #[test]
    fn late_failure_does_not_unlock_newer_save() {
        let mut board = board();
        board.edit_note(NoteId::new(1)).unwrap();
        let first = board.begin_save(NoteId::new(1)).unwrap();
        board.cancel_edit(NoteId::new(1)).unwrap();
        board.edit_note(NoteId::new(1)).unwrap();
        let second = board.begin_save(NoteId::new(1)).unwrap();

        let outcome = board.finish_save(first, Err(Error::Transport("reset".to_string())));

        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        assert!(board.card(NoteId::new(1)).unwrap().session().unwrap().is_saving());
        assert!(matches!(
            board.begin_save(NoteId::new(1)),
            Err(Error::SaveInFlight(_))
        ));

        assert_eq!(board.finish_save(second, Ok(())), SaveOutcome::Saved);
        assert!(!board.card(NoteId::new(1)).unwrap().is_editing());
    }

    #[test]
    fn operations_on_viewing_cards_are_rejected() {
        let mut board = board();
        assert!(matches!(
            board.begin_save(NoteId::new(1)),
            Err(Error::NotEditing(_))
        ));
        assert!(matches!(
            board.cancel_edit(NoteId::new(1)),
            Err(Error::NotEditing(_))
        ));
        assert!(matches!(
            board.edit_note(NoteId::new(99)),
            Err(Error::NoteNotFound(_))
        ));
    }
}
