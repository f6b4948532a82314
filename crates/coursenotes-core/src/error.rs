//! Error types for coursenotes-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using coursenotes-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in coursenotes-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// No panel is registered under the requested semester
    #[error("Unknown semester: {0}")]
    UnknownSemester(String),

    /// Note card not present on the board
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// Save or cancel requested for a card that is not being edited
    #[error("Note {0} is not being edited")]
    NotEditing(NoteId),

    /// A save for this note is already waiting for the server
    #[error("A save for note {0} is already in flight")]
    SaveInFlight(NoteId),

    /// The request never produced a readable response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered but refused the update
    #[error("Update rejected (HTTP {status}): {reason}")]
    Rejected { status: u16, reason: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
