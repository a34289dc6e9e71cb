//! Interactive gradebook menu
//!
//! A numbered menu over one in-memory gradebook. Every prompt is re-asked until
//! it parses, every core error is reported and the menu loop carries on. Input
//! and output are generic so the whole session can be scripted in tests.

use gradebook::analytics::{self, AverageRange, PerformanceCategory, RankedStudent, Trend};
use gradebook::config::Config;
use gradebook::models::{Grade, Gradebook};
use gradebook::report::ReportFormat;
use gradebook::search;
use gradebook::sorting::{self, SortOrder};
use gradebook::{debug, info, warn, GradebookError};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

const MENU: &[&str] = &[
    "Add student",
    "Remove student",
    "Search students",
    "Advanced search",
    "Add grade",
    "Remove grade",
    "Clear subject grades",
    "View student details",
    "View all students",
    "View subject statistics",
    "View class averages",
    "Sort students by performance",
    "Sort students by name (bubble sort)",
    "View top performers",
    "View grade distribution",
    "Export report",
    "Exit",
];

/// Percentage points per block of a distribution bar
const BAR_SCALE: f64 = 2.0;

/// Failure of one menu action
#[derive(Debug, Error)]
enum ShellError {
    #[error(transparent)]
    Core(#[from] GradebookError),

    #[error("Report export failed: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("end of input")]
    EndOfInput,
}

type ShellResult<T = ()> = Result<T, ShellError>;

/// Run the menu on stdin/stdout with the startup gradebook
///
/// # Returns
/// `false` if the session ended on an I/O error
pub fn run(gradebook: Gradebook, config: &Config) -> bool {
    let stdin = io::stdin();
    let mut shell = Shell::new(gradebook, config, stdin.lock(), io::stdout());
    match shell.run() {
        Ok(()) => true,
        Err(e) => {
            gradebook::error!("Shell terminated: {e}");
            false
        }
    }
}

/// Menu session state
pub struct Shell<'c, R, W> {
    gradebook: Gradebook,
    config: &'c Config,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Shell<'c, R, W> {
    /// Create a session over `gradebook`
    pub const fn new(gradebook: Gradebook, config: &'c Config, input: R, output: W) -> Self {
        Self {
            gradebook,
            config,
            input,
            output,
        }
    }

    /// Loop over the menu until Exit or end of input
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails
    pub fn run(&mut self) -> io::Result<()> {
        info!("Shell started with {} students", self.gradebook.len());

        loop {
            self.print_menu()?;
            let choice = match self.prompt(&format!("Enter your choice (1-{}): ", MENU.len())) {
                Ok(choice) => choice,
                Err(ShellError::EndOfInput) => break,
                Err(ShellError::Io(e)) => return Err(e),
                Err(e) => {
                    writeln!(self.output, "✗ {e}")?;
                    continue;
                }
            };

            let Ok(number) = choice.parse::<usize>() else {
                writeln!(self.output, "✗ Invalid choice '{choice}'")?;
                continue;
            };
            if number == MENU.len() {
                break;
            }

            match self.dispatch(number) {
                Ok(()) => {}
                Err(ShellError::EndOfInput) => break,
                Err(ShellError::Io(e)) => return Err(e),
                Err(ShellError::Core(e)) => {
                    warn!("Menu action {number} failed: {e}");
                    writeln!(self.output, "✗ {e}")?;
                    writeln!(self.output, "  Please try again with valid inputs.")?;
                }
                Err(e) => writeln!(self.output, "✗ {e}")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        info!("Shell closed with {} students", self.gradebook.len());
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Gradebook ===")?;
        for (i, item) in MENU.iter().enumerate() {
            writeln!(self.output, "{:>2}. {item}", i + 1)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: usize) -> ShellResult {
        match choice {
            1 => self.add_student(),
            2 => self.remove_student(),
            3 => self.search_students(),
            4 => self.advanced_search(),
            5 => self.add_grade(),
            6 => self.remove_grade(),
            7 => self.clear_subject(),
            8 => self.view_student(),
            9 => self.view_all(),
            10 => self.subject_statistics(),
            11 => self.class_averages(),
            12 => self.sort_by_performance(),
            13 => self.sort_by_name(),
            14 => self.top_performers(),
            15 => self.distribution(),
            16 => self.export_report(),
            _ => {
                writeln!(self.output, "✗ Invalid choice '{choice}'")?;
                Ok(())
            }
        }
    }

    // --- input helpers ---

    /// Print `label` and read one trimmed line
    fn prompt(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the answer parses as `T`
    fn prompt_parsed<T>(&mut self, label: &str) -> ShellResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        loop {
            let answer = self.prompt(label)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "✗ {e}")?,
            }
        }
    }

    /// Prompt until a non-empty answer is given
    fn prompt_required(&mut self, label: &str) -> ShellResult<String> {
        loop {
            let answer = self.prompt(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "✗ A value is required")?;
        }
    }

    fn prompt_subject(&mut self) -> ShellResult<String> {
        writeln!(
            self.output,
            "Available subjects: {}",
            self.gradebook.subjects().join(", ")
        )?;
        self.prompt_required("Enter subject: ")
    }

    fn require_students(&self, operation: &str) -> ShellResult {
        if self.gradebook.is_empty() {
            return Err(GradebookError::EmptyData(operation.to_string()).into());
        }
        Ok(())
    }

    // --- actions ---

    fn add_student(&mut self) -> ShellResult {
        let name = self.prompt("Enter student name: ")?;
        let added = self.gradebook.add_student(&name)?.name().to_string();
        debug!("Added student '{added}'");
        writeln!(self.output, "✓ Added student '{added}'")?;
        Ok(())
    }

    fn remove_student(&mut self) -> ShellResult {
        self.require_students("student removal")?;
        let name = self.prompt("Enter student name to remove: ")?;
        let removed = self.gradebook.remove_student(&name)?;
        debug!("Removed student '{}'", removed.name());
        writeln!(
            self.output,
            "✓ Removed student '{}' ({} grades)",
            removed.name(),
            removed.grade_count()
        )?;
        Ok(())
    }

    fn search_students(&mut self) -> ShellResult {
        self.require_students("student search")?;
        let query = self.prompt_required("Enter student name to search: ")?;
        let results = search::search_students(&self.gradebook, &query);

        writeln!(self.output, "\nSearch results for '{query}':")?;
        if results.is_empty() {
            writeln!(self.output, "  No students found matching your search.")?;
            writeln!(
                self.output,
                "  Available students: {}",
                self.gradebook.student_names().join(", ")
            )?;
            return Ok(());
        }
        for (label, names) in [
            ("Exact", &results.exact),
            ("Partial", &results.partial),
            ("Similar", &results.similar),
        ] {
            if !names.is_empty() {
                writeln!(self.output, "  {label} matches: {}", names.join(", "))?;
            }
        }
        Ok(())
    }

    fn advanced_search(&mut self) -> ShellResult {
        self.require_students("advanced search")?;
        writeln!(self.output, "1. Search by name")?;
        writeln!(self.output, "2. Search by performance category")?;
        writeln!(self.output, "3. Search by average range")?;

        let names = match self.prompt("Enter search type (1-3): ")?.as_str() {
            "1" => {
                let query = self.prompt_required("Enter student name to search: ")?;
                search::search_students(&self.gradebook, &query)
                    .iter()
                    .cloned()
                    .collect()
            }
            "2" => {
                let labels: Vec<&str> = PerformanceCategory::ALL.iter().map(|c| c.label()).collect();
                writeln!(self.output, "Performance categories: {}", labels.join(", "))?;
                let category: PerformanceCategory = self.prompt_parsed("Enter performance category: ")?;
                analytics::students_in_category(&self.gradebook, category)
            }
            "3" => {
                let range: AverageRange = self.prompt_parsed("Average range (e.g. 80-90): ")?;
                analytics::students_in_average_range(&self.gradebook, range)
            }
            other => {
                writeln!(self.output, "✗ Invalid search type '{other}'")?;
                return Ok(());
            }
        };

        writeln!(self.output, "\nAdvanced search results:")?;
        if names.is_empty() {
            writeln!(self.output, "  No students found matching your criteria.")?;
        }
        for (i, name) in names.iter().enumerate() {
            let student = self.gradebook.student(name)?;
            writeln!(
                self.output,
                "{}. {name} (Avg: {:.2})",
                i + 1,
                student.overall_average()
            )?;
        }
        Ok(())
    }

    fn add_grade(&mut self) -> ShellResult {
        self.require_students("grade addition")?;
        let name = self.prompt("Enter student name: ")?;
        self.gradebook.student(&name)?;
        let subject = self.prompt_subject()?;
        let subject = self.gradebook.resolve_subject(&subject)?.to_string();
        let grade: Grade = self.prompt_parsed("Enter grade (0-100): ")?;

        self.gradebook.add_grade(&name, &subject, grade.value())?;
        writeln!(self.output, "✓ Added grade {grade} to {name}'s {subject}")?;
        Ok(())
    }

    fn remove_grade(&mut self) -> ShellResult {
        self.require_students("grade removal")?;
        let name = self.prompt("Enter student name: ")?;
        let subject = self.prompt_subject()?;

        let student = self.gradebook.student(&name)?;
        let grades = student
            .grades(&subject)
            .ok_or_else(|| GradebookError::UnknownSubject(subject.clone()))?;
        if grades.is_empty() {
            writeln!(self.output, "  No {subject} grades recorded for {name}.")?;
            return Ok(());
        }
        let listing: Vec<String> = grades
            .iter()
            .enumerate()
            .map(|(i, g)| format!("{}: {g}", i + 1))
            .collect();
        writeln!(self.output, "  {}", listing.join("  "))?;

        let position: usize = self.prompt_parsed("Enter grade number to remove: ")?;
        let index = position
            .checked_sub(1)
            .ok_or_else(|| GradebookError::invalid("grade numbers start at 1"))?;
        let removed = self.gradebook.remove_grade(&name, &subject, index)?;
        writeln!(self.output, "✓ Removed grade {removed} from {name}'s {subject}")?;
        Ok(())
    }

    fn clear_subject(&mut self) -> ShellResult {
        self.require_students("clearing grades")?;
        let name = self.prompt("Enter student name: ")?;
        let subject = self.prompt_subject()?;
        let cleared = self.gradebook.clear_subject(&name, &subject)?;
        writeln!(self.output, "✓ Cleared {cleared} grades")?;
        Ok(())
    }

    fn view_student(&mut self) -> ShellResult {
        self.require_students("viewing student details")?;
        let name = self.prompt("Enter student name: ")?;
        let student = self.gradebook.student(&name)?;

        writeln!(self.output, "\nDetailed report: {}", student.name())?;
        for summary in analytics::student_report(student) {
            if summary.grades.is_empty() {
                writeln!(self.output, "\n{}: No grades available", summary.subject)?;
                continue;
            }
            let grades: Vec<String> = summary.grades.iter().map(ToString::to_string).collect();
            writeln!(self.output, "\n{}:", summary.subject)?;
            writeln!(self.output, "   Grades: {}", grades.join(", "))?;
            writeln!(self.output, "   Average: {:.2}", summary.average)?;
            if let (Some(high), Some(low)) = (summary.highest, summary.lowest) {
                writeln!(self.output, "   Highest: {high:.1}  Lowest: {low:.1}")?;
            }
            if summary.trend != Trend::InsufficientData {
                writeln!(self.output, "   Trend: {}", summary.trend)?;
            }
        }

        if student.grade_count() == 0 {
            writeln!(self.output, "\nNo grades available for {}", student.name())?;
        } else {
            writeln!(self.output, "\nOverall average: {:.2}", student.overall_average())?;
            writeln!(self.output, "Category: {}", student.performance_category())?;
            writeln!(self.output, "Total grades: {}", student.grade_count())?;
        }
        Ok(())
    }

    fn view_all(&mut self) -> ShellResult {
        self.require_students("viewing all students")?;
        writeln!(self.output, "1. Default order")?;
        writeln!(self.output, "2. Sorted by name (A-Z)")?;
        writeln!(self.output, "3. Sorted by name (Z-A)")?;

        let names = match self.prompt("Choose display option (1-3): ")?.as_str() {
            "2" => sorting::sorted_student_names(&self.gradebook, SortOrder::Ascending),
            "3" => sorting::sorted_student_names(&self.gradebook, SortOrder::Descending),
            "1" => self.gradebook.student_names(),
            _ => {
                writeln!(self.output, "✗ Invalid choice, using default order")?;
                self.gradebook.student_names()
            }
        };

        writeln!(self.output, "\nAll students ({}):", names.len())?;
        for (i, name) in names.iter().enumerate() {
            let student = self.gradebook.student(name)?;
            writeln!(
                self.output,
                "{}. {name}  Average: {:.2} | {} | Grades: {}",
                i + 1,
                student.overall_average(),
                student.performance_category(),
                student.grade_count()
            )?;
        }
        Ok(())
    }

    fn subject_statistics(&mut self) -> ShellResult {
        self.require_students("viewing subject statistics")?;
        let subject = self.prompt_subject()?;
        let Some(stats) = analytics::subject_statistics(&self.gradebook, &subject)? else {
            writeln!(self.output, "  No grade data available for {subject}")?;
            return Ok(());
        };

        writeln!(self.output, "\nStatistics for {}:", stats.subject)?;
        writeln!(self.output, "  Highest grade: {:.2}", stats.highest)?;
        writeln!(self.output, "  Lowest grade: {:.2}", stats.lowest)?;
        writeln!(self.output, "  Class average: {:.2}", stats.average)?;
        writeln!(self.output, "  Total assessments: {}", stats.total_assessments)?;
        writeln!(
            self.output,
            "  Students with grades: {}/{}",
            stats.students_with_grades, stats.total_students
        )?;
        Ok(())
    }

    fn class_averages(&mut self) -> ShellResult {
        self.require_students("viewing class averages")?;
        let overall = analytics::class_average(&self.gradebook, None)?;
        writeln!(self.output, "\nOverall class average: {overall:.2}")?;
        writeln!(self.output, "Subject averages:")?;
        for subject in self.gradebook.subjects() {
            let average = analytics::class_average(&self.gradebook, Some(subject))?;
            writeln!(self.output, "  {subject}: {average:.2}")?;
        }
        Ok(())
    }

    fn sort_by_performance(&mut self) -> ShellResult {
        self.require_students("sorting students")?;
        writeln!(self.output, "1. Overall average (high to low)")?;
        writeln!(self.output, "2. Overall average (low to high)")?;
        writeln!(self.output, "3. Subject average (high to low)")?;
        writeln!(self.output, "4. Subject average (low to high)")?;

        let choice = self.prompt("Enter choice (1-4): ")?;
        let order = match choice.as_str() {
            "1" | "3" => SortOrder::Descending,
            "2" | "4" => SortOrder::Ascending,
            _ => {
                writeln!(self.output, "✗ Invalid choice '{choice}'")?;
                return Ok(());
            }
        };
        let ranking = if choice == "1" || choice == "2" {
            analytics::rank_by_average(&self.gradebook, order)
        } else {
            let subject = self.prompt_subject()?;
            analytics::rank_by_subject(&self.gradebook, &subject, order)?
        };

        self.print_ranking(&ranking, false)
    }

    fn sort_by_name(&mut self) -> ShellResult {
        self.require_students("sorting students by name")?;
        writeln!(self.output, "1. A-Z (ascending)")?;
        writeln!(self.output, "2. Z-A (descending)")?;

        let order = match self.prompt("Enter choice (1-2): ")?.as_str() {
            "1" => SortOrder::Ascending,
            "2" => SortOrder::Descending,
            other => {
                writeln!(self.output, "✗ Invalid choice '{other}'")?;
                return Ok(());
            }
        };

        let mut names = self.gradebook.student_names();
        let stats = sorting::bubble_sort_names(&mut names, order);
        debug!(
            "Bubble sort: {} passes, {} comparisons, {} swaps",
            stats.passes, stats.comparisons, stats.swaps
        );

        writeln!(self.output, "\nStudents sorted by name ({order}):")?;
        for (i, name) in names.iter().enumerate() {
            let student = self.gradebook.student(name)?;
            writeln!(
                self.output,
                "{}. {name} (Avg: {:.2})",
                i + 1,
                student.overall_average()
            )?;
        }
        writeln!(
            self.output,
            "\nSorted {} students with {} comparisons and {} swaps.",
            names.len(),
            stats.comparisons,
            stats.swaps
        )?;
        Ok(())
    }

    fn top_performers(&mut self) -> ShellResult {
        self.require_students("viewing top performers")?;
        writeln!(self.output, "1. Overall performance")?;
        writeln!(self.output, "2. Subject performance")?;
        let choice = self.prompt("Enter choice (1-2): ")?;
        if choice != "1" && choice != "2" {
            writeln!(self.output, "✗ Invalid choice '{choice}'")?;
            return Ok(());
        }

        let answer = self.prompt(&format!(
            "Number of top performers to show [{}]: ",
            self.config.top_n()
        ))?;
        let requested = if answer.is_empty() {
            i64::try_from(self.config.top_n()).ok()
        } else if let Ok(n) = answer.parse::<i64>() {
            Some(n)
        } else {
            writeln!(self.output, "  Using default: {}", analytics::DEFAULT_TOP_N)?;
            None
        };

        let subject = if choice == "2" {
            Some(self.prompt_subject()?)
        } else {
            None
        };
        let top = analytics::top_performers(&self.gradebook, requested, subject.as_deref())?;
        self.print_ranking(&top, true)
    }

    fn print_ranking(&mut self, ranking: &[RankedStudent], with_category: bool) -> ShellResult {
        if ranking.is_empty() {
            writeln!(self.output, "  No students with grades found!")?;
            return Ok(());
        }
        for (i, entry) in ranking.iter().enumerate() {
            write!(self.output, "{}. {}: {:.2}", i + 1, entry.name, entry.average)?;
            if with_category {
                let category = PerformanceCategory::from_average(entry.average);
                write!(self.output, " ({category})")?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn distribution(&mut self) -> ShellResult {
        self.require_students("viewing grade distribution")?;
        let distribution = analytics::grade_distribution(&self.gradebook);
        if distribution.total() == 0 {
            writeln!(self.output, "  No grades in the system!")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "\nGrade distribution ({} total grades):",
            distribution.total()
        )?;
        for (band, count, pct) in distribution.rows() {
            writeln!(
                self.output,
                "{band}: {count} grades ({pct:.1}%) {}",
                bar(pct)
            )?;
        }
        Ok(())
    }

    fn export_report(&mut self) -> ShellResult {
        self.require_students("report export")?;
        let format: ReportFormat = loop {
            let answer = self.prompt("Report format (md/html) [html]: ")?;
            if answer.is_empty() {
                break ReportFormat::Html;
            }
            match answer.parse() {
                Ok(format) => break format,
                Err(e) => writeln!(self.output, "✗ {e}")?,
            }
        };

        let path = super::report::write_report(&self.gradebook, format, None, self.config)
            .map_err(|e| ShellError::Report(e.to_string()))?;
        writeln!(self.output, "✓ Report generated: {}", path.display())?;
        Ok(())
    }
}

/// Bar of one block per [`BAR_SCALE`] percentage points
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(percentage: f64) -> String {
    "█".repeat((percentage / BAR_SCALE) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook::sample::load_sample_data;

    fn session(gradebook: Gradebook, script: &str) -> (Gradebook, String) {
        let config = Config::from_defaults();
        let mut output = Vec::new();
        let gradebook = {
            let mut shell = Shell::new(gradebook, &config, script.as_bytes(), &mut output);
            shell.run().unwrap();
            shell.gradebook
        };
        (gradebook, String::from_utf8(output).unwrap())
    }

    fn sample() -> Gradebook {
        let mut gradebook = Gradebook::new();
        load_sample_data(&mut gradebook);
        gradebook
    }

    #[test]
    fn test_exit_and_end_of_input() {
        let (_, out) = session(Gradebook::new(), "17\n");
        assert!(out.contains("Goodbye!"));
        let (_, out) = session(Gradebook::new(), "");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_add_student_and_grade() {
        let script = "1\nAlice\n5\nalice\nmathematics\nabc\n120\n88\n17\n";
        let (gradebook, out) = session(Gradebook::new(), script);

        assert!(out.contains("✓ Added student 'Alice'"));
        assert!(out.contains("Invalid input"));
        assert!(out.contains("✓ Added grade 88.0 to alice's Mathematics"));
        let alice = gradebook.student("Alice").unwrap();
        assert_eq!(alice.grades("Mathematics").unwrap().len(), 1);
    }

    #[test]
    fn test_errors_keep_loop_running() {
        let script = "1\nAlice\n1\nALICE\n2\nBob\n17\n";
        let (gradebook, out) = session(Gradebook::new(), script);

        assert!(out.contains("Student 'ALICE' already exists"));
        assert!(out.contains("Student 'Bob' not found"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(gradebook.len(), 1);
    }

    #[test]
    fn test_empty_gradebook_operations_report_empty_data() {
        let (_, out) = session(Gradebook::new(), "9\n15\n17\n");
        assert!(out.contains("Cannot perform viewing all students: no data available"));
        assert!(out.contains("Cannot perform viewing grade distribution: no data available"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, out) = session(Gradebook::new(), "x\n42\n17\n");
        assert!(out.contains("✗ Invalid choice 'x'"));
        assert!(out.contains("✗ Invalid choice '42'"));
    }

    #[test]
    fn test_search_and_advanced_search() {
        let script = "3\ndabe\n4\n2\nvery good\n4\n3\n90-100\n17\n";
        let (_, out) = session(sample(), script);

        assert!(out.contains("Partial matches: Dabe Dabe"));
        assert!(out.contains("1. Botho Mmutle (Avg: 87.00)"));
        assert!(out.contains("1. Dabe Dabe (Avg: 91.67)"));
    }

    #[test]
    fn test_remove_and_clear_grades() {
        let script = "6\nGrace Nabi\nScience\n2\n7\nGrace Nabi\nEnglish\n17\n";
        let (gradebook, out) = session(sample(), script);

        assert!(out.contains("✓ Removed grade 52.0 from Grace Nabi's Science"));
        assert!(out.contains("✓ Cleared 3 grades"));
        let grace = gradebook.student("Grace Nabi").unwrap();
        assert_eq!(grace.grades("Science").unwrap().len(), 2);
        assert!(grace.grades("English").unwrap().is_empty());
    }

    #[test]
    fn test_top_performers_default_n() {
        let (_, out) = session(sample(), "14\n1\n0\n17\n");
        assert!(out.contains("1. Dabe Dabe: 91.67 (Excellent)"));
        assert!(out.contains("5. Grace Nabi"));
    }

    #[test]
    fn test_sort_by_name_descending() {
        let (_, out) = session(sample(), "13\n2\n17\n");
        let katlo = out.find("1. Katlo Bonno").unwrap();
        let aone = out.find("5. Aone Baithei").unwrap();
        assert!(katlo < aone);
    }

    #[test]
    fn test_distribution_bars() {
        let mut gradebook = Gradebook::new();
        gradebook.add_student("Alice").unwrap();
        for grade in [95.0, 82.0, 71.0, 65.0, 40.0] {
            gradebook.add_grade("Alice", "Science", grade).unwrap();
        }
        let (_, out) = session(gradebook, "15\n17\n");
        assert!(out.contains("A (90-100): 1 grades (20.0%) ██████████"));
        assert!(out.contains("F (0-59): 1 grades (20.0%)"));
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar(0.0), "");
        assert_eq!(bar(100.0).chars().count(), 50);
    }
}
