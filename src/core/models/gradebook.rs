//! Gradebook record store

use super::student::same_subject;
use super::{Grade, Student};
use crate::core::error::{GradebookError, Result};

/// Subjects used when no list is configured
pub const DEFAULT_SUBJECTS: [&str; 3] = ["Mathematics", "English", "Science"];

/// In-memory collection of students sharing one fixed subject list.
///
/// Students are kept in insertion order, which is the enumeration order used
/// wherever ties have to be broken. Names are unique case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradebook {
    subjects: Vec<String>,
    students: Vec<Student>,
}

impl Default for Gradebook {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(ToString::to_string).collect(),
            students: Vec::new(),
        }
    }
}

impl Gradebook {
    /// Create an empty gradebook with the default subjects
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty gradebook with a custom subject list
    ///
    /// Blank entries and case-insensitive duplicates are dropped; order is preserved.
    ///
    /// # Errors
    /// Returns `InvalidInput` if no usable subject remains
    pub fn with_subjects<S: AsRef<str>>(subjects: &[S]) -> Result<Self> {
        let mut unique: Vec<String> = Vec::new();
        for subject in subjects {
            let subject = subject.as_ref().trim();
            if subject.is_empty() || unique.iter().any(|s| same_subject(s, subject)) {
                continue;
            }
            unique.push(subject.to_string());
        }

        if unique.is_empty() {
            return Err(GradebookError::invalid("at least one subject is required"));
        }

        Ok(Self {
            subjects: unique,
            students: Vec::new(),
        })
    }

    /// Configured subjects in display order
    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Canonical spelling of a configured subject
    ///
    /// # Errors
    /// Returns `UnknownSubject` if the subject is not configured
    pub fn resolve_subject(&self, subject: &str) -> Result<&str> {
        self.subjects
            .iter()
            .find(|s| same_subject(s, subject))
            .map(String::as_str)
            .ok_or_else(|| GradebookError::UnknownSubject(subject.trim().to_string()))
    }

    /// All students in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Student names in insertion order
    #[must_use]
    pub fn student_names(&self) -> Vec<String> {
        self.students.iter().map(|s| s.name().to_string()).collect()
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the gradebook has no students
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Whether a student with this name exists (case-insensitive)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Total number of grades across all students
    #[must_use]
    pub fn total_grade_count(&self) -> usize {
        self.students.iter().map(Student::grade_count).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|s| s.is_named(name))
    }

    /// Look up a student by name (case-insensitive)
    ///
    /// # Errors
    /// Returns `StudentNotFound` if no such student exists
    pub fn student(&self, name: &str) -> Result<&Student> {
        self.position(name)
            .map(|idx| &self.students[idx])
            .ok_or_else(|| GradebookError::StudentNotFound(name.trim().to_string()))
    }

    fn student_mut(&mut self, name: &str) -> Result<&mut Student> {
        let idx = self
            .position(name)
            .ok_or_else(|| GradebookError::StudentNotFound(name.trim().to_string()))?;
        Ok(&mut self.students[idx])
    }

    /// Add a student with empty grade lists for every subject
    ///
    /// # Errors
    /// - `InvalidInput` if the name is empty or whitespace
    /// - `DuplicateStudent` if the name already exists (case-insensitive)
    pub fn add_student(&mut self, name: &str) -> Result<&Student> {
        let student = Student::new(name, &self.subjects)?;
        if self.contains(student.name()) {
            return Err(GradebookError::DuplicateStudent(student.name().to_string()));
        }

        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Remove a student together with all their grades
    ///
    /// # Errors
    /// Returns `StudentNotFound` if no such student exists
    pub fn remove_student(&mut self, name: &str) -> Result<Student> {
        let idx = self
            .position(name)
            .ok_or_else(|| GradebookError::StudentNotFound(name.trim().to_string()))?;
        Ok(self.students.remove(idx))
    }

    /// Append a grade to a student's subject history
    ///
    /// # Errors
    /// - `StudentNotFound` if the student does not exist
    /// - `UnknownSubject` if the subject is not configured
    /// - `InvalidInput` if the value is not a finite number within `[0, 100]`
    pub fn add_grade(&mut self, name: &str, subject: &str, value: f64) -> Result<Grade> {
        self.student(name)?;
        self.resolve_subject(subject)?;
        let grade = Grade::new(value)?;

        self.student_mut(name)?.grades_mut(subject)?.push(grade);
        Ok(grade)
    }

    /// Remove and return the grade at `index` in a subject's history
    ///
    /// # Errors
    /// - `StudentNotFound` if the student does not exist
    /// - `UnknownSubject` if the subject is not configured
    /// - `InvalidInput` if `index` is out of range
    pub fn remove_grade(&mut self, name: &str, subject: &str, index: usize) -> Result<Grade> {
        let grades = self.student_mut(name)?.grades_mut(subject)?;
        if index >= grades.len() {
            return Err(GradebookError::invalid(format!(
                "grade index {index} out of range ({} recorded)",
                grades.len()
            )));
        }
        Ok(grades.remove(index))
    }

    /// Empty a subject's history, returning how many grades were removed
    ///
    /// # Errors
    /// - `StudentNotFound` if the student does not exist
    /// - `UnknownSubject` if the subject is not configured
    pub fn clear_subject(&mut self, name: &str, subject: &str) -> Result<usize> {
        let grades = self.student_mut(name)?.grades_mut(subject)?;
        let removed = grades.len();
        grades.clear();
        Ok(removed)
    }
}
