//! Core gradebook functionality: record store, analytics, search, sorting and reports

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod sample;
pub mod search;
pub mod sorting;

pub use error::{GradebookError, Result};
pub use models::{Grade, Gradebook, Student, SubjectGrades, DEFAULT_SUBJECTS};

/// Returns the current version of the `gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
