//! Application views

mod course_page;

pub use course_page::CoursePage;
