//! Data models for the gradebook

pub mod grade;
pub mod gradebook;
pub mod student;

pub use grade::Grade;
pub use gradebook::{Gradebook, DEFAULT_SUBJECTS};
pub use student::{Student, SubjectGrades};
