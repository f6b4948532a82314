//! UI Components
//!
//! One component group per page behavior.

mod image_upload;
mod note_card;
mod note_list;
mod semester_tabs;

pub use image_upload::ImageUpload;
pub use note_list::NoteList;
pub use semester_tabs::{SemesterPanels, SemesterTabBar};
