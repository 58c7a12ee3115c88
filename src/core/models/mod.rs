//! Data models for the academic record

pub mod course;
pub mod grade;
pub mod semester;

pub use course::Course;
pub use grade::Grade;
pub use semester::Semester;
