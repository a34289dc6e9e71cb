//! Report generation for a gradebook
//!
//! Renders a class summary (averages, subject statistics, rankings, grade
//! distribution and per-student details) as Markdown or HTML.

pub mod formats;

use crate::core::analytics::{
    self, GradeDistribution, RankedStudent, SubjectStatistics, SubjectSummary,
};
use crate::core::error::{GradebookError, Result};
use crate::core::models::{Gradebook, Student};
use crate::core::sorting::{self, SortOrder};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Everything a template needs, computed once from the gradebook.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Gradebook being reported
    pub gradebook: &'a Gradebook,
    /// Report title
    pub title: String,
    /// Overall class average
    pub class_average: f64,
    /// Statistics per subject that has grades, in subject order
    pub subject_statistics: Vec<SubjectStatistics>,
    /// Students ranked by overall average, best first
    pub ranking: Vec<RankedStudent>,
    /// Number of ranking entries shown as top performers, at least one
    pub top_n: usize,
    /// Histogram over every grade
    pub distribution: GradeDistribution,
}

impl<'a> ReportContext<'a> {
    /// Compute a report context
    ///
    /// A `top_n` of zero falls back to [`analytics::DEFAULT_TOP_N`].
    ///
    /// # Errors
    /// Returns `EmptyData` if the gradebook has no students
    pub fn new(gradebook: &'a Gradebook, title: &str, top_n: usize) -> Result<Self> {
        if gradebook.is_empty() {
            return Err(GradebookError::EmptyData("report generation".to_string()));
        }

        let mut subject_statistics = Vec::new();
        for subject in gradebook.subjects() {
            if let Some(stats) = analytics::subject_statistics(gradebook, subject)? {
                subject_statistics.push(stats);
            }
        }

        Ok(Self {
            gradebook,
            title: title.to_string(),
            class_average: analytics::class_average(gradebook, None)?,
            subject_statistics,
            ranking: analytics::rank_by_average(gradebook, SortOrder::Descending),
            top_n: analytics::resolve_top_n(i64::try_from(top_n).ok()),
            distribution: analytics::grade_distribution(gradebook),
        })
    }

    /// Top performers, at most `top_n` entries
    #[must_use]
    pub fn top_performers(&self) -> &[RankedStudent] {
        &self.ranking[..self.ranking.len().min(self.top_n)]
    }

    /// Students in case-insensitive name order with their subject summaries
    #[must_use]
    pub fn students_by_name(&self) -> Vec<(&'a Student, Vec<SubjectSummary>)> {
        sorting::sorted_student_names(self.gradebook, SortOrder::Ascending)
            .iter()
            .filter_map(|name| self.gradebook.student(name).ok())
            .map(|student| (student, analytics::student_report(student)))
            .collect()
    }

    /// Number of students
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.gradebook.len()
    }

    /// Number of grades
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.gradebook.total_grade_count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        crate::debug!("Report written to {}", output_path.display());
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::load_sample_data;

    #[test]
    fn test_empty_gradebook_rejected() {
        let gradebook = Gradebook::new();
        assert!(matches!(
            ReportContext::new(&gradebook, "Empty", 5),
            Err(GradebookError::EmptyData(_))
        ));
    }

    #[test]
    fn test_context_contents() {
        let mut gradebook = Gradebook::new();
        load_sample_data(&mut gradebook);

        let ctx = ReportContext::new(&gradebook, "Sample", 2).unwrap();
        assert_eq!(ctx.student_count(), 5);
        assert_eq!(ctx.grade_count(), 45);
        assert_eq!(ctx.subject_statistics.len(), 3);
        assert_eq!(ctx.top_performers().len(), 2);
        assert_eq!(ctx.top_performers()[0].name, "Dabe Dabe");

        let names: Vec<&str> = ctx.students_by_name().iter().map(|(s, _)| s.name()).collect();
        assert_eq!(names[0], "Aone Baithei");
        assert_eq!(names[4], "Katlo Bonno");
    }

    #[test]
    fn test_zero_top_n_uses_default() {
        let mut gradebook = Gradebook::new();
        load_sample_data(&mut gradebook);

        let ctx = ReportContext::new(&gradebook, "t", 0).unwrap();
        assert_eq!(ctx.top_n, analytics::DEFAULT_TOP_N);
        assert_eq!(ctx.top_performers().len(), 5);
    }
}
