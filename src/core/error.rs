//! Error taxonomy for the record store and analytics layer

use thiserror::Error;

/// Failures reported by gradebook operations.
///
/// A rejected operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// Empty name, out-of-range or non-numeric grade, bad index, malformed range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No student with that name
    #[error("Student '{0}' not found")]
    StudentNotFound(String),

    /// A student with that name (case-insensitive) already exists
    #[error("Student '{0}' already exists")]
    DuplicateStudent(String),

    /// Subject is not part of the configured subject list
    #[error("Subject '{0}' is not configured")]
    UnknownSubject(String),

    /// The operation needs at least one student
    #[error("Cannot perform {0}: no data available")]
    EmptyData(String),
}

/// Crate-wide result alias
pub type Result<T, E = GradebookError> = std::result::Result<T, E>;

impl GradebookError {
    /// Shorthand for [`GradebookError::InvalidInput`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            GradebookError::StudentNotFound("Eve".to_string()).to_string(),
            "Student 'Eve' not found"
        );
        assert_eq!(
            GradebookError::UnknownSubject("Art".to_string()).to_string(),
            "Subject 'Art' is not configured"
        );
        assert_eq!(
            GradebookError::invalid("index 4 out of range").to_string(),
            "Invalid input: index 4 out of range"
        );
    }
}
