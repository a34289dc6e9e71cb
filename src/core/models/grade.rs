//! Grade value

use crate::core::error::{GradebookError, Result};
use std::fmt;
use std::str::FromStr;

/// A validated grade: a finite number within `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Grade(f64);

impl Grade {
    /// Lowest accepted grade
    pub const MIN: f64 = 0.0;
    /// Highest accepted grade
    pub const MAX: f64 = 100.0;

    /// Validate a raw number
    ///
    /// # Errors
    /// Returns `InvalidInput` if the value is NaN, infinite, or outside `[0, 100]`
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(GradebookError::invalid(format!(
                "grade must be a number, got {value}"
            )));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(GradebookError::invalid(format!(
                "grade must be between 0 and 100, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The numeric value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Grade {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| GradebookError::invalid(format!("grade must be a number, got '{trimmed}'")))?;
        Self::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Grade::new(0.0).is_ok());
        assert!(Grade::new(100.0).is_ok());
        assert!(Grade::new(75.5).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        for bad in [-1.0, 100.01, 101.0, -0.5] {
            assert!(
                matches!(Grade::new(bad), Err(GradebookError::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(Grade::new(f64::NAN).is_err());
        assert!(Grade::new(f64::INFINITY).is_err());
        assert!(matches!(
            "invalid".parse::<Grade>(),
            Err(GradebookError::InvalidInput(_))
        ));
        assert!("".parse::<Grade>().is_err());
        assert!("nan".parse::<Grade>().is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let grade: Grade = " 88.5 ".parse().unwrap();
        assert!((grade.value() - 88.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_one_decimal() {
        assert_eq!(Grade::new(90.0).unwrap().to_string(), "90.0");
    }
}
