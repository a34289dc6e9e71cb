//! Student name search
//!
//! Names are compared lowercased and trimmed. Each candidate lands in at most one
//! bucket, checked in priority order: exact, partial, similar.

use crate::core::models::Gradebook;

/// Minimum length both names need before their prefixes are compared
const PREFIX_LEN: usize = 3;

/// Largest length difference (in characters) two similar names may have
const MAX_LENGTH_DELTA: usize = 2;

/// Match buckets of a name search, each in gradebook order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    /// Names equal to the query
    pub exact: Vec<String>,
    /// Names containing the query
    pub partial: Vec<String>,
    /// Names close to the query (typo tolerance)
    pub similar: Vec<String>,
}

impl SearchResults {
    /// Whether no bucket holds a match
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty() && self.similar.is_empty()
    }

    /// Total matches across buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.partial.len() + self.similar.len()
    }

    /// Every match, exact first, then partial, then similar
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.exact
            .iter()
            .chain(self.partial.iter())
            .chain(self.similar.iter())
    }
}

/// Which bucket a candidate falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Lowercased names are equal
    Exact,
    /// Query is a substring of the candidate
    Partial,
    /// Lengths within two characters and one contains the other or they share a 3-character prefix
    Similar,
}

/// Heuristic typo check between two lowercased names.
///
/// Not an edit distance: the lengths may differ by at most two characters, and
/// then either one name contains the other or both share their first three characters.
#[must_use]
pub fn is_similar_name(a: &str, b: &str) -> bool {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a.abs_diff(len_b) > MAX_LENGTH_DELTA {
        return false;
    }

    if a.contains(b) || b.contains(a) {
        return true;
    }

    len_a >= PREFIX_LEN
        && len_b >= PREFIX_LEN
        && a.chars().take(PREFIX_LEN).eq(b.chars().take(PREFIX_LEN))
}

/// Classify one candidate name against a query
///
/// Both arguments are normalized here; an empty query never matches.
#[must_use]
pub fn classify(query: &str, candidate: &str) -> Option<MatchKind> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    let candidate = candidate.trim().to_lowercase();

    if candidate == query {
        Some(MatchKind::Exact)
    } else if candidate.contains(&query) {
        Some(MatchKind::Partial)
    } else if is_similar_name(&candidate, &query) {
        Some(MatchKind::Similar)
    } else {
        None
    }
}

/// Search candidate names, preserving their order inside each bucket
pub fn search_names<'a, I>(query: &str, candidates: I) -> SearchResults
where
    I: IntoIterator<Item = &'a str>,
{
    let mut results = SearchResults::default();
    for candidate in candidates {
        let bucket = match classify(query, candidate) {
            Some(MatchKind::Exact) => &mut results.exact,
            Some(MatchKind::Partial) => &mut results.partial,
            Some(MatchKind::Similar) => &mut results.similar,
            None => continue,
        };
        bucket.push(candidate.to_string());
    }
    results
}

/// Search the gradebook's student names
#[must_use]
pub fn search_students(gradebook: &Gradebook, query: &str) -> SearchResults {
    search_names(query, gradebook.students().iter().map(|s| s.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_not_exact() {
        let results = search_names("Alice", ["Alice Johnson", "Bob Smith"]);
        assert!(results.exact.is_empty());
        assert_eq!(results.partial, vec!["Alice Johnson".to_string()]);
        assert!(results.similar.is_empty());
    }

    #[test]
    fn test_exact_ignores_case() {
        let results = search_names("alice johnson", ["Alice Johnson", "Bob Smith"]);
        assert_eq!(results.exact, vec!["Alice Johnson".to_string()]);
        assert!(results.partial.is_empty());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_similar_by_prefix() {
        // "jon" vs "john": lengths differ by one, share "jo" only; "johm" shares "joh"
        let results = search_names("Johm", ["John", "Jon", "Mary"]);
        assert_eq!(results.similar, vec!["John".to_string()]);
        assert!(results.exact.is_empty() && results.partial.is_empty());
    }

    #[test]
    fn test_similar_when_candidate_inside_query() {
        // Candidate is a substring of the query, so it cannot be partial but is similar
        let results = search_names("Evan", ["Eva"]);
        assert_eq!(results.similar, vec!["Eva".to_string()]);
    }

    #[test]
    fn test_similar_rejects_large_length_gap() {
        assert!(!is_similar_name("alexander", "alex"));
        assert!(is_similar_name("alexa", "alex"));
        assert!(!is_similar_name("ab", "ac"));
    }

    #[test]
    fn test_buckets_are_disjoint_and_ordered() {
        let names = ["Sam", "Samantha", "Samuel", "sam", "Pam"];
        let results = search_names("SAM", names);

        assert_eq!(results.exact, vec!["Sam".to_string(), "sam".to_string()]);
        assert_eq!(results.partial, vec!["Samantha".to_string(), "Samuel".to_string()]);
        assert!(results.similar.is_empty());
        assert_eq!(
            results.iter().cloned().collect::<Vec<_>>(),
            vec!["Sam", "sam", "Samantha", "Samuel"]
        );
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search_names("   ", ["Alice"]).is_empty());
        assert_eq!(classify("", "Alice"), None);
    }

    #[test]
    fn test_search_students_in_gradebook() {
        let mut gradebook = Gradebook::new();
        gradebook.add_student("Alice Johnson").unwrap();
        gradebook.add_student("Bob Smith").unwrap();

        let results = search_students(&gradebook, " bob smith ");
        assert_eq!(results.exact, vec!["Bob Smith".to_string()]);
    }
}
