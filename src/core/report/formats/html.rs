//! HTML report generator
//!
//! Produces a single self-contained page with inline CSS.

use super::format_optional;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// Width in pixels of a 100% distribution bar
const BAR_WIDTH: f64 = 300.0;

/// HTML report generator
pub struct HtmlReporter;

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        HTML_TEMPLATE
            .replace("{{title}}", &escape(&ctx.title))
            .replace("{{student_count}}", &ctx.student_count().to_string())
            .replace("{{grade_count}}", &ctx.grade_count().to_string())
            .replace("{{subjects}}", &escape(&ctx.gradebook.subjects().join(", ")))
            .replace("{{class_average}}", &format!("{:.2}", ctx.class_average))
            .replace("{{subject_statistics}}", &Self::generate_subject_table(ctx))
            .replace("{{top_performers}}", &Self::generate_top_table(ctx))
            .replace("{{distribution}}", &Self::generate_distribution_table(ctx))
            .replace("{{student_details}}", &Self::generate_student_details(ctx))
    }

    fn generate_subject_table(ctx: &ReportContext) -> String {
        if ctx.subject_statistics.is_empty() {
            return "  <p><em>No grades recorded.</em></p>".to_string();
        }

        let mut html = String::from("  <table>\n");
        html.push_str(
            "    <tr><th>Subject</th><th>Highest</th><th>Lowest</th><th>Average</th>\
             <th>Assessments</th><th>Students Graded</th></tr>\n",
        );
        for stats in &ctx.subject_statistics {
            let _ = writeln!(
                html,
                "    <tr><td>{}</td><td>{:.1}</td><td>{:.1}</td><td>{:.2}</td><td>{}</td><td>{}/{}</td></tr>",
                escape(&stats.subject),
                stats.highest,
                stats.lowest,
                stats.average,
                stats.total_assessments,
                stats.students_with_grades,
                stats.total_students
            );
        }
        html.push_str("  </table>");
        html
    }

    fn generate_top_table(ctx: &ReportContext) -> String {
        let top = ctx.top_performers();
        if top.is_empty() {
            return "  <p><em>No student has grades yet.</em></p>".to_string();
        }

        let mut html = String::from("  <table>\n");
        html.push_str("    <tr><th>Rank</th><th>Student</th><th>Average</th></tr>\n");
        for (rank, entry) in top.iter().enumerate() {
            let _ = writeln!(
                html,
                "    <tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                rank + 1,
                escape(&entry.name),
                entry.average
            );
        }
        html.push_str("  </table>");
        html
    }

    fn generate_distribution_table(ctx: &ReportContext) -> String {
        let mut html = String::from("  <table>\n");
        html.push_str("    <tr><th>Band</th><th>Count</th><th>Share</th><th></th></tr>\n");
        for (band, count, pct) in ctx.distribution.rows() {
            let _ = writeln!(
                html,
                "    <tr><td>{band}</td><td>{count}</td><td>{pct:.1}%</td>\
                 <td><span class=\"bar\" style=\"width: {:.0}px\"></span></td></tr>",
                pct / 100.0 * BAR_WIDTH
            );
        }
        html.push_str("  </table>");
        html
    }

    fn generate_student_details(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for (student, summaries) in ctx.students_by_name() {
            html.push_str("  <div class=\"student\">\n");
            let _ = writeln!(html, "    <h3>{}</h3>", escape(student.name()));
            let _ = writeln!(
                html,
                "    <p class=\"category\">Overall average {:.2} ({})</p>",
                student.overall_average(),
                student.performance_category()
            );
            html.push_str("    <table>\n");
            html.push_str(
                "      <tr><th>Subject</th><th>Grades</th><th>Average</th><th>Highest</th>\
                 <th>Lowest</th><th>Trend</th></tr>\n",
            );
            for summary in summaries {
                let grades = if summary.grades.is_empty() {
                    "-".to_string()
                } else {
                    summary
                        .grades
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                let _ = writeln!(
                    html,
                    "      <tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&summary.subject),
                    grades,
                    summary.average,
                    format_optional(summary.highest),
                    format_optional(summary.lowest),
                    summary.trend
                );
            }
            html.push_str("    </table>\n  </div>\n");
        }
        html
    }
}

/// Escape text for use inside HTML element content and attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Gradebook;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>O'Neil & Co</b>"), "&lt;b&gt;O&#39;Neil &amp; Co&lt;/b&gt;");
    }

    #[test]
    fn test_render_html() {
        let mut gradebook = Gradebook::new();
        gradebook.add_student("Tom <script>").unwrap();
        gradebook.add_grade("Tom <script>", "Science", 95.0).unwrap();
        gradebook.add_grade("Tom <script>", "Science", 91.0).unwrap();

        let ctx = ReportContext::new(&gradebook, "Class & Co", 5).unwrap();
        let output = HtmlReporter::new().render(&ctx).unwrap();

        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(!output.contains("{{"));
        assert!(output.contains("<title>Class &amp; Co</title>"));
        assert!(output.contains("Tom &lt;script&gt;"));
        assert!(!output.contains("<script>"));
        assert!(output.contains("<td>A (90-100)</td><td>2</td><td>100.0%</td>"));
        assert!(output.contains("width: 300px"));
        assert!(output.contains("Declining (-4.0)"));
        assert!(output.contains("Overall average 93.00 (Excellent)"));
    }
}
