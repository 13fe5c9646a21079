//! Score Aggregator — runs the matcher over every category and rolls the
//! results up into one `MatchReport`.
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`; `KeywordAtsScorer` is the only
//! backend today.

use serde::{Deserialize, Serialize};

use crate::ats::extractor::extract;
use crate::ats::matcher::match_category;
use crate::ats::vocabulary::Category;

/// Overall score at or above which a resume is a strong match.
pub const STRONG_THRESHOLD: u32 = 70;
/// Overall score at or above which a resume is a moderate match.
pub const MODERATE_THRESHOLD: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Qualitative bucket for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Strong,
    Moderate,
    Weak,
}

impl Tier {
    pub fn from_overall(overall: u32) -> Self {
        if overall >= STRONG_THRESHOLD {
            Tier::Strong
        } else if overall >= MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Weak
        }
    }

    /// Advisory text shown next to the overall score.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Strong => "Excellent! Your resume is well-optimized for ATS systems.",
            Tier::Moderate => "Good match. Consider adding more relevant keywords.",
            Tier::Weak => "Consider incorporating more keywords from the job description.",
        }
    }
}

/// Match result for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub percentage: u32,
    /// Resume keywords in this category, as extracted (capped 10/8/8).
    pub found: Vec<String>,
    /// Job keywords the resume does not cover (capped).
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical: CategoryScore,
    pub soft: CategoryScore,
    pub industry: CategoryScore,
}

impl CategoryScores {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        [&self.technical, &self.soft, &self.industry].into_iter()
    }
}

/// Full ATS match report for one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub overall: u32, // 0 – 100
    pub tier: Tier,
    pub message: String,
    pub categories: CategoryScores,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores generated resume content against a job description.
///
/// Carried in `AppState` as `Arc<dyn AtsScorer>`.
pub trait AtsScorer: Send + Sync {
    fn score(&self, job_description: &str, summary: &str, bullets: &[String]) -> MatchReport;
}

/// Substring-containment keyword scorer. Pure and deterministic.
pub struct KeywordAtsScorer;

impl AtsScorer for KeywordAtsScorer {
    fn score(&self, job_description: &str, summary: &str, bullets: &[String]) -> MatchReport {
        compute_match(job_description, summary, bullets)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume (summary plus bullets) against a job description.
pub fn compute_match(job_description: &str, summary: &str, bullets: &[String]) -> MatchReport {
    let resume_text = format!("{} {}", summary, bullets.join(" "));
    score(job_description, &resume_text)
}

/// Scores raw resume text against raw job description text.
///
/// Never fails: an empty job description yields 100 in every category.
pub fn score(job_text: &str, resume_text: &str) -> MatchReport {
    let job_keywords = extract(job_text);
    let resume_keywords = extract(resume_text);

    let category_score = |category: Category| {
        let resume_side = resume_keywords.get(category);
        let result = match_category(
            job_keywords.get(category),
            resume_side,
            category.gap_cap(),
        );
        CategoryScore {
            category,
            percentage: result.percentage,
            found: resume_side.to_vec(),
            missing: result.gaps,
        }
    };

    let [technical, soft, industry] = Category::ALL.map(category_score);
    let categories = CategoryScores {
        technical,
        soft,
        industry,
    };

    let percentages: Vec<u32> = categories.iter().map(|c| c.percentage).collect();
    let overall = rounded_mean(&percentages);
    let tier = Tier::from_overall(overall);

    MatchReport {
        overall,
        tier,
        message: tier.message().to_string(),
        categories,
    }
}

/// Mean of `values` rounded half-up, in exact integer math. Empty input is 0.
pub fn rounded_mean(values: &[u32]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().sum();
    let n = values.len() as u32;
    (sum * 2 + n) / (n * 2)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn bullets(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_react_typescript_resume_is_strong() {
        let report = compute_match(
            "Looking for a React and TypeScript developer with strong communication skills",
            "Built React applications with TypeScript",
            &bullets(&["Led team communication efforts"]),
        );

        let technical = &report.categories.technical;
        assert!(technical.found.contains(&"react".to_string()));
        assert!(technical.found.contains(&"typescript".to_string()));
        assert!(report
            .categories
            .soft
            .found
            .contains(&"communication".to_string()));
        assert!(report.overall >= 70, "Expected ≥70, got {}", report.overall);
        assert_eq!(report.tier, Tier::Strong);
    }

    #[test]
    fn test_backend_job_against_frontend_resume() {
        let report = compute_match(
            "Python Django backend with Docker and Kubernetes",
            "Frontend developer",
            &bullets(&["Built UI components"]),
        );

        let technical = &report.categories.technical;
        assert_eq!(technical.percentage, 0);
        assert_eq!(technical.missing, ["python", "docker", "kubernetes"]);
        assert!(technical.found.is_empty());

        // No soft or industry terms in the job description: both are vacuously 100,
        // so the overall is round(200 / 3) = 67.
        assert_eq!(report.categories.soft.percentage, 100);
        assert_eq!(report.categories.industry.percentage, 100);
        assert_eq!(report.overall, 67);
        assert_eq!(report.tier, Tier::Moderate);
    }

    #[test]
    fn test_missing_terms_in_every_category_is_weak() {
        let report = compute_match(
            "Python Django backend with Docker and Kubernetes. Strong leadership in healthcare marketing.",
            "Frontend developer",
            &bullets(&["Built UI components"]),
        );

        assert_eq!(report.categories.technical.percentage, 0);
        assert_eq!(report.categories.soft.missing, ["leadership"]);
        assert_eq!(report.categories.industry.missing, ["healthcare", "marketing"]);
        assert_eq!(report.overall, 0);
        assert_eq!(report.tier, Tier::Weak);
        assert_eq!(report.message, Tier::Weak.message());
    }

    /// An empty job description sets no expectations, so every category is
    /// vacuously fully matched. This is intentional and not a signal that the
    /// resume has no gaps; callers show a disclaimer instead.
    #[test]
    fn test_empty_job_description_is_vacuous_full_match() {
        let report = compute_match(
            "",
            "Seasoned accountant with SQL and Excel skills",
            &bullets(&["Closed books monthly", "Led audit preparation"]),
        );

        for category in report.categories.iter() {
            assert_eq!(category.percentage, 100);
            assert!(category.missing.is_empty());
        }
        assert_eq!(report.overall, 100);
        assert_eq!(report.tier, Tier::Strong);
    }

    #[test]
    fn test_empty_everything_is_not_an_error() {
        let report = compute_match("", "", &[]);
        assert_eq!(report.overall, 100);
        assert!(report.categories.iter().all(|c| c.found.is_empty()));
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        assert_eq!(rounded_mean(&[70, 70, 71]), 70); // 70.33
        assert_eq!(rounded_mean(&[70, 71, 71]), 71); // 70.67
        assert_eq!(rounded_mean(&[0, 100, 100]), 67);
        assert_eq!(rounded_mean(&[50, 50, 51]), 50);
        assert_eq!(rounded_mean(&[100, 100, 100]), 100);
    }

    #[test]
    fn test_overall_matches_mean_of_category_percentages() {
        let report = compute_match(
            "React developer with leadership in finance and sales",
            "React engineer",
            &bullets(&["Drove finance reporting"]),
        );
        let percentages: Vec<u32> = report.categories.iter().map(|c| c.percentage).collect();
        // technical 100, soft 0, industry 50
        assert_eq!(percentages, vec![100, 0, 50]);
        assert_eq!(report.overall, rounded_mean(&percentages));
        assert_eq!(report.overall, 50);
        assert_eq!(report.tier, Tier::Moderate);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_overall(100), Tier::Strong);
        assert_eq!(Tier::from_overall(70), Tier::Strong);
        assert_eq!(Tier::from_overall(69), Tier::Moderate);
        assert_eq!(Tier::from_overall(50), Tier::Moderate);
        assert_eq!(Tier::from_overall(49), Tier::Weak);
        assert_eq!(Tier::from_overall(0), Tier::Weak);
    }

    #[test]
    fn test_found_lists_keep_every_extracted_keyword() {
        let resume = "react javascript typescript python java sql aws docker kubernetes node \
                      leadership management communication collaboration teamwork \
                      analytical creative strategic";
        let report = score("", resume);

        let technical = &report.categories.technical.found;
        assert_eq!(technical.len(), 10);
        assert_eq!(technical[8], "kubernetes");
        assert_eq!(technical[9], "node");
        assert_eq!(report.categories.soft.found.len(), 8);
        assert_eq!(report.categories.soft.found[7], "strategic");
    }

    #[test]
    fn test_resume_casing_does_not_matter() {
        let lower = compute_match("AWS and Docker", "aws docker", &[]);
        let upper = compute_match("AWS and Docker", "AWS DOCKER", &[]);
        assert_eq!(lower, upper);
        assert_eq!(lower.categories.technical.percentage, 100);
    }

    #[test]
    fn test_keyword_scorer_delegates_to_compute_match() {
        let scorer = KeywordAtsScorer;
        let summary = "Python engineer";
        let bullets = bullets(&["Shipped Docker images"]);
        let jd = "Python and Docker";
        assert_eq!(
            scorer.score(jd, summary, &bullets),
            compute_match(jd, summary, &bullets)
        );
    }

    #[test]
    fn test_report_serializes_with_expected_shape() {
        let report = compute_match("React", "React", &[]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["overall"], 100);
        assert_eq!(value["tier"], "strong");
        assert_eq!(value["categories"]["technical"]["percentage"], 100);
        assert_eq!(value["categories"]["technical"]["found"][0], "react");
        assert!(value["categories"]["soft"]["missing"].as_array().unwrap().is_empty());
        assert!(value["categories"]["industry"].is_object());
    }
}
