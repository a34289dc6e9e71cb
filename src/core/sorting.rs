//! Case-insensitive bubble sort over student names

use crate::core::models::Gradebook;
use std::fmt;
use std::str::FromStr;

/// Direction of a sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "a" => Ok(Self::Ascending),
            "desc" | "descending" | "d" => Ok(Self::Descending),
            _ => Err(format!("Unknown sort order: '{s}'")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Work done by one bubble sort run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Passes over the list, including the final pass without swaps
    pub passes: usize,
    /// Adjacent comparisons made
    pub comparisons: usize,
    /// Adjacent swaps made
    pub swaps: usize,
}

/// Bubble sort names in place by their lowercased value.
///
/// Only strictly out-of-order neighbours are swapped, so equal keys keep their
/// relative order. The sort stops after the first pass that swaps nothing.
pub fn bubble_sort_names<T: AsRef<str>>(names: &mut [T], order: SortOrder) -> SortStats {
    let mut stats = SortStats::default();
    let n = names.len();
    if n <= 1 {
        return stats;
    }

    let mut keys: Vec<String> = names.iter().map(|s| s.as_ref().to_lowercase()).collect();

    for pass in 0..n {
        stats.passes += 1;
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            stats.comparisons += 1;
            let out_of_order = match order {
                SortOrder::Ascending => keys[j] > keys[j + 1],
                SortOrder::Descending => keys[j] < keys[j + 1],
            };
            if out_of_order {
                keys.swap(j, j + 1);
                names.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    stats
}

/// Student names sorted case-insensitively with [`bubble_sort_names`]
#[must_use]
pub fn sorted_student_names(gradebook: &Gradebook, order: SortOrder) -> Vec<String> {
    let mut names = gradebook.student_names();
    bubble_sort_names(&mut names, order);
    names
}
