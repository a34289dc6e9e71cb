//! Markdown report generator
//!
//! Renders the gradebook summary as GitHub-flavoured Markdown tables.

use super::format_optional;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        MARKDOWN_TEMPLATE
            .replace("{{title}}", &ctx.title)
            .replace("{{student_count}}", &ctx.student_count().to_string())
            .replace("{{grade_count}}", &ctx.grade_count().to_string())
            .replace("{{subjects}}", &ctx.gradebook.subjects().join(", "))
            .replace("{{class_average}}", &format!("{:.2}", ctx.class_average))
            .replace("{{subject_statistics}}", &Self::generate_subject_table(ctx))
            .replace("{{top_performers}}", &Self::generate_top_table(ctx))
            .replace("{{distribution}}", &Self::generate_distribution_table(ctx))
            .replace("{{student_details}}", &Self::generate_student_details(ctx))
    }

    fn generate_subject_table(ctx: &ReportContext) -> String {
        if ctx.subject_statistics.is_empty() {
            return "_No grades recorded._".to_string();
        }

        let mut table = String::new();
        let _ = writeln!(
            table,
            "| Subject | Highest | Lowest | Average | Assessments | Students Graded |"
        );
        let _ = writeln!(table, "|---|---:|---:|---:|---:|---:|");
        for stats in &ctx.subject_statistics {
            let _ = writeln!(
                table,
                "| {} | {:.1} | {:.1} | {:.2} | {} | {}/{} |",
                stats.subject,
                stats.highest,
                stats.lowest,
                stats.average,
                stats.total_assessments,
                stats.students_with_grades,
                stats.total_students
            );
        }
        table
    }

    fn generate_top_table(ctx: &ReportContext) -> String {
        let top = ctx.top_performers();
        if top.is_empty() {
            return "_No student has grades yet._".to_string();
        }

        let mut table = String::new();
        let _ = writeln!(table, "| Rank | Student | Average |");
        let _ = writeln!(table, "|---:|---|---:|");
        for (rank, entry) in top.iter().enumerate() {
            let _ = writeln!(
                table,
                "| {} | {} | {:.2} |",
                rank + 1,
                entry.name,
                entry.average
            );
        }
        table
    }

    fn generate_distribution_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        let _ = writeln!(table, "| Band | Count | Share |");
        let _ = writeln!(table, "|---|---:|---:|");
        for (band, count, pct) in ctx.distribution.rows() {
            let _ = writeln!(table, "| {band} | {count} | {pct:.1}% |");
        }
        let _ = writeln!(table, "| **Total** | {} | |", ctx.distribution.total());
        table
    }

    fn generate_student_details(ctx: &ReportContext) -> String {
        let mut out = String::new();
        for (student, summaries) in ctx.students_by_name() {
            let _ = writeln!(out, "### {}\n", student.name());
            let _ = writeln!(
                out,
                "Overall average **{:.2}** ({})\n",
                student.overall_average(),
                student.performance_category()
            );
            let _ = writeln!(out, "| Subject | Grades | Average | Highest | Lowest | Trend |");
            let _ = writeln!(out, "|---|---|---:|---:|---:|---|");
            for summary in summaries {
                let grades: Vec<String> = summary.grades.iter().map(ToString::to_string).collect();
                let _ = writeln!(
                    out,
                    "| {} | {} | {:.2} | {} | {} | {} |",
                    summary.subject,
                    if grades.is_empty() {
                        "-".to_string()
                    } else {
                        grades.join(", ")
                    },
                    summary.average,
                    format_optional(summary.highest),
                    format_optional(summary.lowest),
                    summary.trend
                );
            }
            out.push('\n');
        }
        out
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Gradebook;

    #[test]
    fn test_render_markdown() {
        let mut gradebook = Gradebook::new();
        gradebook.add_student("Alice").unwrap();
        gradebook.add_student("Bob").unwrap();
        gradebook.add_grade("Alice", "Mathematics", 70.0).unwrap();
        gradebook.add_grade("Alice", "Mathematics", 85.0).unwrap();

        let ctx = ReportContext::new(&gradebook, "Term 1", 5).unwrap();
        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.starts_with("# Term 1"));
        assert!(!output.contains("{{"));
        assert!(output.contains("| Mathematics | 85.0 | 70.0 | 77.50 | 2 | 1/2 |"));
        assert!(output.contains("| 1 | Alice | 77.50 |"));
        assert!(output.contains("| A (90-100) | 0 | 0.0% |"));
        assert!(output.contains("| C (70-79) | 1 | 50.0% |"));
        assert!(output.contains("Improving (+15.0)"));
        assert!(output.contains("### Bob"));
    }
}
