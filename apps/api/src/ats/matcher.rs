//! Category Matcher — compares job-side and resume-side keywords of one category.

use serde::{Deserialize, Serialize};

/// Outcome of matching one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub percentage: u32,
    /// Job keywords with no resume counterpart, job order, capped.
    pub gaps: Vec<String>,
}

/// Matches `job` keywords against `resume` keywords.
///
/// A job keyword counts as matched when some resume keyword contains it or is
/// contained by it, so "manage" and "management" pair up. With no job-side
/// keywords the category is vacuously fully matched (100, no gaps).
pub fn match_category(job: &[String], resume: &[String], gap_cap: usize) -> CategoryMatch {
    if job.is_empty() {
        return CategoryMatch {
            percentage: 100,
            gaps: vec![],
        };
    }

    let (matched, missing): (Vec<&String>, Vec<&String>) =
        job.iter().partition(|keyword| is_covered(keyword, resume));

    CategoryMatch {
        percentage: rounded_percentage(matched.len(), job.len()),
        gaps: missing.into_iter().take(gap_cap).cloned().collect(),
    }
}

/// Bidirectional substring containment against any resume keyword.
pub fn is_covered(keyword: &str, resume: &[String]) -> bool {
    resume
        .iter()
        .any(|r| r.contains(keyword) || keyword.contains(r.as_str()))
}

/// `round(part / whole * 100)` with half-up rounding, in exact integer math.
/// `whole` must be non-zero.
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    ((part * 200 + whole) / (whole * 2)) as u32
}
