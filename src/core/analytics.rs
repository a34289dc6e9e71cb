//! Averages, trends, rankings and distributions derived from the gradebook

use crate::core::error::{GradebookError, Result};
use crate::core::models::{Grade, Gradebook, Student};
use crate::core::sorting::SortOrder;
use std::fmt;
use std::str::FromStr;

/// Number of entries returned by top-performer queries when none is requested
pub const DEFAULT_TOP_N: usize = 5;

/// Arithmetic mean, `0.0` for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().map(|g| g.value()).sum::<f64>() / grades.len() as f64
}

/// Direction of a measured trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// Latest grade is above the first
    Improving,
    /// Latest grade is below the first
    Declining,
    /// Latest grade equals the first
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improving => write!(f, "Improving"),
            Self::Declining => write!(f, "Declining"),
            Self::Stable => write!(f, "Stable"),
        }
    }
}

/// First-versus-latest grade comparison within one subject
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trend {
    /// Fewer than two grades recorded
    InsufficientData,
    /// Two or more grades recorded
    Measured {
        /// Sign of `change`
        direction: TrendDirection,
        /// Latest grade minus first grade
        change: f64,
    },
}

impl Trend {
    /// Compare the most recent grade against the first one ever recorded
    #[must_use]
    pub fn from_grades(grades: &[Grade]) -> Self {
        let (Some(first), Some(latest)) = (grades.first(), grades.last()) else {
            return Self::InsufficientData;
        };
        if grades.len() < 2 {
            return Self::InsufficientData;
        }

        let change = latest.value() - first.value();
        let direction = if change > 0.0 {
            TrendDirection::Improving
        } else if change < 0.0 {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        };
        Self::Measured { direction, change }
    }

    /// Signed change, `None` when there is not enough data
    #[must_use]
    pub const fn change(&self) -> Option<f64> {
        match self {
            Self::InsufficientData => None,
            Self::Measured { change, .. } => Some(*change),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData => write!(f, "Insufficient data"),
            Self::Measured { direction, change } => write!(f, "{direction} ({change:+.1})"),
        }
    }
}

/// Performance bucket of an overall average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceCategory {
    /// 90 and above
    Excellent,
    /// 80 to below 90
    VeryGood,
    /// 70 to below 80
    Good,
    /// 60 to below 70
    NeedsImprovement,
    /// Below 60
    Poor,
}

impl PerformanceCategory {
    /// Every category from best to worst
    pub const ALL: [Self; 5] = [
        Self::Excellent,
        Self::VeryGood,
        Self::Good,
        Self::NeedsImprovement,
        Self::Poor,
    ];

    /// Bucket an average; lower edges are inclusive
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::Excellent
        } else if average >= 80.0 {
            Self::VeryGood
        } else if average >= 70.0 {
            Self::Good
        } else if average >= 60.0 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PerformanceCategory {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|c| c.label().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| GradebookError::invalid(format!("unknown performance category '{s}'")))
    }
}

/// Letter band of a single grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeBand {
    /// 90 to 100
    A,
    /// 80 to below 90
    B,
    /// 70 to below 80
    C,
    /// 60 to below 70
    D,
    /// Below 60
    F,
}

impl GradeBand {
    /// Every band from highest to lowest
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Band a grade falls into
    #[must_use]
    pub fn of(grade: Grade) -> Self {
        match grade.value() {
            v if v >= 90.0 => Self::A,
            v if v >= 80.0 => Self::B,
            v if v >= 70.0 => Self::C,
            v if v >= 60.0 => Self::D,
            _ => Self::F,
        }
    }

    /// Label including the covered range, e.g. "A (90-100)"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A (90-100)",
            Self::B => "B (80-89)",
            Self::C => "C (70-79)",
            Self::D => "D (60-69)",
            Self::F => "F (0-59)",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::F => 4,
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Histogram of grades over the five letter bands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeDistribution {
    counts: [usize; 5],
}

impl GradeDistribution {
    /// Count every grade into its band
    pub fn from_grades<I: IntoIterator<Item = Grade>>(grades: I) -> Self {
        let mut distribution = Self::default();
        for grade in grades {
            distribution.counts[GradeBand::of(grade).index()] += 1;
        }
        distribution
    }

    /// Number of grades in a band
    #[must_use]
    pub const fn count(&self, band: GradeBand) -> usize {
        self.counts[band.index()]
    }

    /// Number of grades counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of a band in percent, `0.0` when nothing was counted
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, band: GradeBand) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(band) as f64 / total as f64 * 100.0
    }

    /// `(band, count, percentage)` rows from A to F
    pub fn rows(&self) -> impl Iterator<Item = (GradeBand, usize, f64)> + '_ {
        GradeBand::ALL
            .into_iter()
            .map(|band| (band, self.count(band), self.percentage(band)))
    }
}

/// Class-wide statistics for one subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectStatistics {
    /// Canonical subject name
    pub subject: String,
    /// Highest grade recorded
    pub highest: f64,
    /// Lowest grade recorded
    pub lowest: f64,
    /// Mean of every grade recorded
    pub average: f64,
    /// Number of grades recorded
    pub total_assessments: usize,
    /// Students with at least one grade in the subject
    pub students_with_grades: usize,
    /// Students in the gradebook
    pub total_students: usize,
}

/// One student's results in one subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSummary {
    /// Canonical subject name
    pub subject: String,
    /// Grades in recorded order
    pub grades: Vec<Grade>,
    /// Mean, `0.0` when no grades
    pub average: f64,
    /// Highest grade, if any
    pub highest: Option<f64>,
    /// Lowest grade, if any
    pub lowest: Option<f64>,
    /// First-versus-latest comparison
    pub trend: Trend,
}

impl SubjectSummary {
    fn from_grades(subject: &str, grades: &[Grade]) -> Self {
        let values = grades.iter().map(|g| g.value());
        Self {
            subject: subject.to_string(),
            grades: grades.to_vec(),
            average: average(grades),
            highest: values.clone().reduce(f64::max),
            lowest: values.reduce(f64::min),
            trend: Trend::from_grades(grades),
        }
    }
}

/// Per-subject summaries for a student, in subject order
#[must_use]
pub fn student_report(student: &Student) -> Vec<SubjectSummary> {
    student
        .subjects()
        .iter()
        .map(|s| SubjectSummary::from_grades(&s.subject, &s.grades))
        .collect()
}

/// Analyse one subject of one student
///
/// # Errors
/// Returns `StudentNotFound` or `UnknownSubject`
pub fn analyze_subject(gradebook: &Gradebook, name: &str, subject: &str) -> Result<SubjectSummary> {
    let subject = gradebook.resolve_subject(subject)?;
    let student = gradebook.student(name)?;
    let grades = student
        .grades(subject)
        .ok_or_else(|| GradebookError::UnknownSubject(subject.to_string()))?;
    Ok(SubjectSummary::from_grades(subject, grades))
}

/// Statistics for one subject across every student
///
/// # Returns
/// `Ok(None)` when no student has a grade in the subject
///
/// # Errors
/// Returns `UnknownSubject` if the subject is not configured
pub fn subject_statistics(gradebook: &Gradebook, subject: &str) -> Result<Option<SubjectStatistics>> {
    let subject = gradebook.resolve_subject(subject)?;

    let mut all_grades: Vec<Grade> = Vec::new();
    let mut students_with_grades = 0;
    for student in gradebook.students() {
        let grades = student.grades(subject).unwrap_or_default();
        if !grades.is_empty() {
            students_with_grades += 1;
            all_grades.extend_from_slice(grades);
        }
    }

    let values = all_grades.iter().map(|g| g.value());
    let (Some(highest), Some(lowest)) = (values.clone().reduce(f64::max), values.reduce(f64::min))
    else {
        return Ok(None);
    };

    Ok(Some(SubjectStatistics {
        subject: subject.to_string(),
        highest,
        lowest,
        average: average(&all_grades),
        total_assessments: all_grades.len(),
        students_with_grades,
        total_students: gradebook.len(),
    }))
}

/// Class average for a subject, or overall when `subject` is `None`
///
/// A subject average is the mean of every grade recorded in it. The overall
/// average is the mean of the overall averages of students that have one.
///
/// # Errors
/// Returns `UnknownSubject` if the subject is not configured
#[allow(clippy::cast_precision_loss)]
pub fn class_average(gradebook: &Gradebook, subject: Option<&str>) -> Result<f64> {
    if let Some(subject) = subject {
        let subject = gradebook.resolve_subject(subject)?;
        let grades: Vec<Grade> = gradebook
            .students()
            .iter()
            .flat_map(|s| s.grades(subject).unwrap_or_default().iter().copied())
            .collect();
        return Ok(average(&grades));
    }

    let averages: Vec<f64> = gradebook
        .students()
        .iter()
        .map(Student::overall_average)
        .filter(|avg| *avg > 0.0)
        .collect();
    if averages.is_empty() {
        return Ok(0.0);
    }
    Ok(averages.iter().sum::<f64>() / averages.len() as f64)
}

/// Histogram of every grade in the gradebook
#[must_use]
pub fn grade_distribution(gradebook: &Gradebook) -> GradeDistribution {
    GradeDistribution::from_grades(gradebook.students().iter().flat_map(Student::all_grades))
}

/// A student name paired with the average it was ranked by
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    /// Student name
    pub name: String,
    /// Average used for ranking
    pub average: f64,
}

fn rank(mut entries: Vec<RankedStudent>, order: SortOrder) -> Vec<RankedStudent> {
    // `sort_by` is stable, so ties keep insertion order
    match order {
        SortOrder::Ascending => entries.sort_by(|a, b| a.average.total_cmp(&b.average)),
        SortOrder::Descending => entries.sort_by(|a, b| b.average.total_cmp(&a.average)),
    }
    entries
}

/// Students with an overall average above zero, ordered by that average
#[must_use]
pub fn rank_by_average(gradebook: &Gradebook, order: SortOrder) -> Vec<RankedStudent> {
    let entries = gradebook
        .students()
        .iter()
        .map(|s| RankedStudent {
            name: s.name().to_string(),
            average: s.overall_average(),
        })
        .filter(|r| r.average > 0.0)
        .collect();
    rank(entries, order)
}

/// Students with a subject average above zero, ordered by that average
///
/// # Errors
/// Returns `UnknownSubject` if the subject is not configured
pub fn rank_by_subject(
    gradebook: &Gradebook,
    subject: &str,
    order: SortOrder,
) -> Result<Vec<RankedStudent>> {
    let subject = gradebook.resolve_subject(subject)?;
    let entries = gradebook
        .students()
        .iter()
        .map(|s| RankedStudent {
            name: s.name().to_string(),
            average: average(s.grades(subject).unwrap_or_default()),
        })
        .filter(|r| r.average > 0.0)
        .collect();
    Ok(rank(entries, order))
}

/// Resolve a requested top-N count; missing or non-positive values fall back to [`DEFAULT_TOP_N`]
#[must_use]
pub fn resolve_top_n(requested: Option<i64>) -> usize {
    requested
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_TOP_N)
}

/// Highest-ranked students overall or in one subject
///
/// # Errors
/// Returns `UnknownSubject` if a subject is given and not configured
pub fn top_performers(
    gradebook: &Gradebook,
    n: Option<i64>,
    subject: Option<&str>,
) -> Result<Vec<RankedStudent>> {
    let mut ranking = match subject {
        Some(subject) => rank_by_subject(gradebook, subject, SortOrder::Descending)?,
        None => rank_by_average(gradebook, SortOrder::Descending),
    };
    ranking.truncate(resolve_top_n(n));
    Ok(ranking)
}

/// Names of students whose performance category matches, in insertion order
#[must_use]
pub fn students_in_category(gradebook: &Gradebook, category: PerformanceCategory) -> Vec<String> {
    gradebook
        .students()
        .iter()
        .filter(|s| s.performance_category() == category)
        .map(|s| s.name().to_string())
        .collect()
}

/// Inclusive range of overall averages, written `min-max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl AverageRange {
    /// Build a range
    ///
    /// # Errors
    /// Returns `InvalidInput` if a bound is not finite or `min > max`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GradebookError::invalid("range bounds must be numbers"));
        }
        if min > max {
            return Err(GradebookError::invalid(format!(
                "range minimum {min} is greater than maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Whether `value` lies within the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl FromStr for AverageRange {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || GradebookError::invalid(format!("expected a range like 80-90, got '{s}'"));
        let (min, max) = s.split_once('-').ok_or_else(malformed)?;
        let min = min.trim().parse::<f64>().map_err(|_| malformed())?;
        let max = max.trim().parse::<f64>().map_err(|_| malformed())?;
        Self::new(min, max)
    }
}

/// Names of students whose overall average lies in `range`, in insertion order
#[must_use]
pub fn students_in_average_range(gradebook: &Gradebook, range: AverageRange) -> Vec<String> {
    gradebook
        .students()
        .iter()
        .filter(|s| range.contains(s.overall_average()))
        .map(|s| s.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(values: &[f64]) -> Vec<Grade> {
        values.iter().map(|v| Grade::new(*v).unwrap()).collect()
    }

    fn sample() -> Gradebook {
        let mut gradebook = Gradebook::new();
        let records: [(&str, &[(&str, f64)]); 4] = [
            ("Alice", &[("Mathematics", 95.0), ("English", 85.0)]),
            ("Bob", &[("Mathematics", 60.0), ("Science", 70.0)]),
            ("Carol", &[("Mathematics", 90.0), ("English", 90.0)]),
            ("Dave", &[]),
        ];
        for (name, entries) in records {
            gradebook.add_student(name).unwrap();
            for (subject, value) in entries {
                gradebook.add_grade(name, subject, *value).unwrap();
            }
        }
        gradebook
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert!(average(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_within_bounds() {
        let cases: [&[f64]; 4] = [&[50.0], &[0.0, 100.0], &[71.5, 72.5, 99.0], &[33.3, 33.3, 33.3]];
        for values in cases {
            let avg = average(&grades(values));
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(avg >= min - 1e-9 && avg <= max + 1e-9, "{avg} outside [{min}, {max}]");
        }
    }

    #[test]
    fn test_trend_improving() {
        let trend = Trend::from_grades(&grades(&[70.0, 85.0]));
        assert_eq!(
            trend,
            Trend::Measured {
                direction: TrendDirection::Improving,
                change: 15.0
            }
        );
        assert_eq!(trend.to_string(), "Improving (+15.0)");
    }

    #[test]
    fn test_trend_ignores_middle_grades() {
        let trend = Trend::from_grades(&grades(&[80.0, 20.0, 100.0, 70.0]));
        assert_eq!(trend.change(), Some(-10.0));
        assert!(matches!(
            trend,
            Trend::Measured {
                direction: TrendDirection::Declining,
                ..
            }
        ));

        let stable = Trend::from_grades(&grades(&[75.0, 90.0, 75.0]));
        assert!(matches!(
            stable,
            Trend::Measured {
                direction: TrendDirection::Stable,
                ..
            }
        ));
    }

    #[test]
    fn test_trend_insufficient_data() {
        assert_eq!(Trend::from_grades(&grades(&[85.0])), Trend::InsufficientData);
        assert_eq!(Trend::from_grades(&[]), Trend::InsufficientData);
        assert_eq!(Trend::InsufficientData.change(), None);
    }

    #[test]
    fn test_performance_boundaries() {
        assert_eq!(PerformanceCategory::from_average(100.0), PerformanceCategory::Excellent);
        assert_eq!(PerformanceCategory::from_average(90.0), PerformanceCategory::Excellent);
        assert_eq!(PerformanceCategory::from_average(89.99), PerformanceCategory::VeryGood);
        assert_eq!(PerformanceCategory::from_average(80.0), PerformanceCategory::VeryGood);
        assert_eq!(PerformanceCategory::from_average(70.0), PerformanceCategory::Good);
        assert_eq!(
            PerformanceCategory::from_average(60.0),
            PerformanceCategory::NeedsImprovement
        );
        assert_eq!(PerformanceCategory::from_average(59.9), PerformanceCategory::Poor);
        assert_eq!(PerformanceCategory::from_average(0.0), PerformanceCategory::Poor);
    }

    #[test]
    fn test_performance_category_parse() {
        assert_eq!(
            "very good".parse::<PerformanceCategory>().unwrap(),
            PerformanceCategory::VeryGood
        );
        assert_eq!(
            "Needs_Improvement".parse::<PerformanceCategory>().unwrap(),
            PerformanceCategory::NeedsImprovement
        );
        assert!("great".parse::<PerformanceCategory>().is_err());
    }

    #[test]
    fn test_distribution_one_per_band() {
        let distribution = GradeDistribution::from_grades(grades(&[95.0, 82.0, 71.0, 65.0, 40.0]));

        assert_eq!(distribution.total(), 5);
        for band in GradeBand::ALL {
            assert_eq!(distribution.count(band), 1);
            assert!((distribution.percentage(band) - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_distribution_band_edges() {
        let distribution =
            GradeDistribution::from_grades(grades(&[100.0, 90.0, 89.9, 80.0, 79.5, 60.0, 59.9, 0.0]));
        assert_eq!(distribution.count(GradeBand::A), 2);
        assert_eq!(distribution.count(GradeBand::B), 2);
        assert_eq!(distribution.count(GradeBand::C), 1);
        assert_eq!(distribution.count(GradeBand::D), 1);
        assert_eq!(distribution.count(GradeBand::F), 2);
    }

    #[test]
    fn test_empty_distribution_has_zero_shares() {
        let distribution = GradeDistribution::default();
        assert_eq!(distribution.total(), 0);
        assert!(distribution.rows().all(|(_, count, pct)| count == 0 && pct == 0.0));
    }

    #[test]
    fn test_subject_statistics() {
        let gradebook = sample();
        let stats = subject_statistics(&gradebook, "mathematics").unwrap().unwrap();

        assert_eq!(stats.subject, "Mathematics");
        assert!((stats.highest - 95.0).abs() < f64::EPSILON);
        assert!((stats.lowest - 60.0).abs() < f64::EPSILON);
        assert!((stats.average - 245.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.total_assessments, 3);
        assert_eq!(stats.students_with_grades, 3);
        assert_eq!(stats.total_students, 4);
    }

    #[test]
    fn test_subject_statistics_without_grades() {
        let mut gradebook = Gradebook::new();
        gradebook.add_student("Alice").unwrap();
        assert_eq!(subject_statistics(&gradebook, "Science").unwrap(), None);
        assert!(matches!(
            subject_statistics(&gradebook, "Art"),
            Err(GradebookError::UnknownSubject(_))
        ));
    }

    #[test]
    fn test_class_average() {
        let gradebook = sample();
        // Alice 90, Bob 65, Carol 90; Dave has no grades and is skipped
        let overall = class_average(&gradebook, None).unwrap();
        assert!((overall - 245.0 / 3.0).abs() < 1e-9);

        let english = class_average(&gradebook, Some("English")).unwrap();
        assert!((english - 87.5).abs() < 1e-9);

        assert!(class_average(&Gradebook::new(), None).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_rank_by_average_ties_keep_insertion_order() {
        let gradebook = sample();
        let ranking = rank_by_average(&gradebook, SortOrder::Descending);
        let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol", "Bob"]);

        let ascending = rank_by_average(&gradebook, SortOrder::Ascending);
        let names: Vec<&str> = ascending.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_rank_by_subject_excludes_students_without_grades() {
        let gradebook = sample();
        let ranking = rank_by_subject(&gradebook, "Science", SortOrder::Descending).unwrap();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].name, "Bob");
    }

    #[test]
    fn test_resolve_top_n() {
        assert_eq!(resolve_top_n(None), DEFAULT_TOP_N);
        assert_eq!(resolve_top_n(Some(0)), DEFAULT_TOP_N);
        assert_eq!(resolve_top_n(Some(-3)), DEFAULT_TOP_N);
        assert_eq!(resolve_top_n(Some(2)), 2);
    }

    #[test]
    fn test_top_performers() {
        let gradebook = sample();
        let top = top_performers(&gradebook, Some(1), None).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Alice");

        let fallback = top_performers(&gradebook, Some(0), Some("Mathematics")).unwrap();
        assert_eq!(fallback.len(), 3);
        assert_eq!(fallback[0].name, "Alice");
    }

    #[test]
    fn test_students_in_category() {
        let gradebook = sample();
        assert_eq!(
            students_in_category(&gradebook, PerformanceCategory::Excellent),
            vec!["Alice".to_string(), "Carol".to_string()]
        );
        assert_eq!(
            students_in_category(&gradebook, PerformanceCategory::Poor),
            vec!["Dave".to_string()]
        );
    }

    #[test]
    fn test_average_range() {
        let range: AverageRange = "60 - 70".parse().unwrap();
        assert!(range.contains(60.0));
        assert!(range.contains(70.0));
        assert!(!range.contains(70.1));

        assert!("70".parse::<AverageRange>().is_err());
        assert!("a-b".parse::<AverageRange>().is_err());
        assert!("90-80".parse::<AverageRange>().is_err());

        let gradebook = sample();
        assert_eq!(
            students_in_average_range(&gradebook, range),
            vec!["Bob".to_string()]
        );
    }

    #[test]
    fn test_analyze_subject() {
        let mut gradebook = Gradebook::new();
        gradebook.add_student("Alice").unwrap();
        for value in [70.0, 85.0] {
            gradebook.add_grade("Alice", "Mathematics", value).unwrap();
        }

        let summary = analyze_subject(&gradebook, "alice", "MATHEMATICS").unwrap();
        assert_eq!(summary.subject, "Mathematics");
        assert_eq!(summary.highest, Some(85.0));
        assert_eq!(summary.lowest, Some(70.0));
        assert!((summary.average - 77.5).abs() < 1e-9);
        assert_eq!(summary.trend.change(), Some(15.0));

        let report = student_report(gradebook.student("Alice").unwrap());
        assert_eq!(report.len(), 3);
        assert_eq!(report[1].highest, None);
        assert_eq!(report[1].trend, Trend::InsufficientData);
    }
}
