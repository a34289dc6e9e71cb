//! Student model

use super::Grade;
use crate::core::analytics::{self, GradeDistribution, PerformanceCategory, Trend};
use crate::core::error::{GradebookError, Result};

/// Chronological grade history for one subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectGrades {
    /// Subject name as configured (e.g., "Mathematics")
    pub subject: String,
    /// Grades in the order they were recorded
    pub grades: Vec<Grade>,
}

/// Whether two subject names refer to the same subject (trimmed, case-insensitive)
pub(crate) fn same_subject(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A student and their per-subject grade history
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    subjects: Vec<SubjectGrades>,
}

impl Student {
    /// Create a student with an empty grade list for every subject
    ///
    /// # Arguments
    /// * `name` - Student name; surrounding whitespace is trimmed
    /// * `subjects` - Subject names in display order
    ///
    /// # Errors
    /// Returns `InvalidInput` if the name is empty or whitespace only
    pub fn new<S: AsRef<str>>(name: &str, subjects: &[S]) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GradebookError::invalid("student name cannot be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            subjects: subjects
                .iter()
                .map(|s| SubjectGrades {
                    subject: s.as_ref().to_string(),
                    grades: Vec::new(),
                })
                .collect(),
        })
    }

    /// Student name with its original casing
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `name` refers to this student (case-insensitive, trimmed)
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Per-subject grade histories in subject order
    #[must_use]
    pub fn subjects(&self) -> &[SubjectGrades] {
        &self.subjects
    }

    /// Grades recorded for a subject, `None` if the subject is not configured
    #[must_use]
    pub fn grades(&self, subject: &str) -> Option<&[Grade]> {
        self.subjects
            .iter()
            .find(|s| same_subject(&s.subject, subject))
            .map(|s| s.grades.as_slice())
    }

    pub(crate) fn grades_mut(&mut self, subject: &str) -> Result<&mut Vec<Grade>> {
        self.subjects
            .iter_mut()
            .find(|s| same_subject(&s.subject, subject))
            .map(|s| &mut s.grades)
            .ok_or_else(|| GradebookError::UnknownSubject(subject.trim().to_string()))
    }

    fn require_grades(&self, subject: &str) -> Result<&[Grade]> {
        self.grades(subject)
            .ok_or_else(|| GradebookError::UnknownSubject(subject.trim().to_string()))
    }

    /// All grades across every subject, subject by subject
    pub fn all_grades(&self) -> impl Iterator<Item = Grade> + '_ {
        self.subjects.iter().flat_map(|s| s.grades.iter().copied())
    }

    /// Total number of grades across all subjects
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.subjects.iter().map(|s| s.grades.len()).sum()
    }

    /// Mean of one subject's grades, `0.0` when it has none
    ///
    /// # Errors
    /// Returns `UnknownSubject` if the subject is not configured
    pub fn subject_average(&self, subject: &str) -> Result<f64> {
        self.require_grades(subject).map(analytics::average)
    }

    /// Mean of every grade the student has, `0.0` when there are none
    #[must_use]
    pub fn overall_average(&self) -> f64 {
        let grades: Vec<Grade> = self.all_grades().collect();
        analytics::average(&grades)
    }

    /// First-versus-latest comparison for one subject
    ///
    /// # Errors
    /// Returns `UnknownSubject` if the subject is not configured
    pub fn trend(&self, subject: &str) -> Result<Trend> {
        self.require_grades(subject).map(Trend::from_grades)
    }

    /// Performance bucket of the overall average
    #[must_use]
    pub fn performance_category(&self) -> PerformanceCategory {
        PerformanceCategory::from_average(self.overall_average())
    }

    /// Histogram of every grade the student has
    #[must_use]
    pub fn distribution(&self) -> GradeDistribution {
        GradeDistribution::from_grades(self.all_grades())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_with(grades: &[(&str, &[f64])]) -> Student {
        let subjects: Vec<&str> = grades.iter().map(|(s, _)| *s).collect();
        let mut student = Student::new("Alice Johnson", &subjects).unwrap();
        for (subject, values) in grades {
            let list = student.grades_mut(subject).unwrap();
            list.extend(values.iter().map(|v| Grade::new(*v).unwrap()));
        }
        student
    }

    #[test]
    fn test_student_creation() {
        let student = Student::new("  Bob Smith ", &["Mathematics", "English"]).unwrap();

        assert_eq!(student.name(), "Bob Smith");
        assert_eq!(student.subjects().len(), 2);
        assert_eq!(student.grades("Mathematics"), Some(&[][..]));
        assert_eq!(student.grade_count(), 0);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            Student::new("   ", &["Mathematics"]),
            Err(GradebookError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_name_comparison_ignores_case() {
        let student = Student::new("Alice Johnson", &["Science"]).unwrap();
        assert!(student.is_named("alice johnson"));
        assert!(student.is_named(" ALICE JOHNSON "));
        assert!(!student.is_named("alice"));
    }

    #[test]
    fn test_subject_lookup_ignores_case() {
        let student = student_with(&[("Mathematics", &[80.0])]);
        assert_eq!(student.grades("mathematics").map(<[Grade]>::len), Some(1));
        assert!(student.grades("Art").is_none());
    }

    #[test]
    fn test_subject_lookup_folds_non_ascii() {
        let mut student = Student::new("Zoë", &["Économie"]).unwrap();
        student.grades_mut("ÉCONOMIE").unwrap().push(Grade::new(80.0).unwrap());
        assert_eq!(student.grades("économie").map(<[Grade]>::len), Some(1));
    }

    #[test]
    fn test_averages() {
        let student = student_with(&[
            ("Mathematics", &[80.0, 90.0]),
            ("English", &[70.0]),
            ("Science", &[]),
        ]);

        assert!((student.subject_average("Mathematics").unwrap() - 85.0).abs() < 1e-9);
        assert!(student.subject_average("Science").unwrap().abs() < f64::EPSILON);
        assert!((student.overall_average() - 80.0).abs() < 1e-9);
        assert_eq!(student.grade_count(), 3);
        assert_eq!(student.performance_category(), PerformanceCategory::VeryGood);
    }

    #[test]
    fn test_unknown_subject_errors() {
        let student = student_with(&[("Mathematics", &[80.0])]);
        assert_eq!(
            student.subject_average("History"),
            Err(GradebookError::UnknownSubject("History".to_string()))
        );
        assert!(student.trend("History").is_err());
    }

    #[test]
    fn test_overall_average_without_grades_is_zero() {
        let student = student_with(&[("Mathematics", &[]), ("English", &[])]);
        assert!(student.overall_average().abs() < f64::EPSILON);
        assert_eq!(student.performance_category(), PerformanceCategory::Poor);
    }
}
