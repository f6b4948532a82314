//! Data models for the course notes page

mod note;
mod page;
mod semester;

pub use note::{Note, NoteId};
pub use page::PageData;
pub use semester::{Course, SemesterId, SemesterPanel};
