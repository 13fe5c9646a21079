//! Axum route handlers for the ATS scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::scoring::MatchReport;
use crate::state::AppState;

/// Shown alongside a report computed without a job description.
pub const NO_JOB_DESCRIPTION_DISCLAIMER: &str = "No job description was provided, so every \
    category scores 100% by default. Paste a job description to see a real match score.";

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report: MatchReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

/// POST /api/v1/ats/score
///
/// Scores already-generated resume content against a job description.
/// Never fails on content: blank inputs produce a well-defined report.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let report = state
        .ats_scorer
        .score(&request.job_description, &request.summary, &request.bullets);

    debug!(
        "ATS score: overall={} tier={:?} ({} bullets)",
        report.overall,
        report.tier,
        request.bullets.len()
    );

    Json(ScoreResponse {
        disclaimer: disclaimer_for(&request.job_description),
        report,
    })
}

/// Returns the vacuous-score disclaimer when the job description is blank.
pub fn disclaimer_for(job_description: &str) -> Option<String> {
    job_description
        .trim()
        .is_empty()
        .then(|| NO_JOB_DESCRIPTION_DISCLAIMER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclaimer_only_for_blank_job_description() {
        assert!(disclaimer_for("").is_some());
        assert!(disclaimer_for("   \n\t").is_some());
        assert!(disclaimer_for("Rust engineer").is_none());
    }

    #[test]
    fn test_score_request_fields_default_when_absent() {
        let request: ScoreRequest = serde_json::from_str(r#"{"summary": "Built APIs"}"#).unwrap();
        assert!(request.job_description.is_empty());
        assert!(request.bullets.is_empty());
        assert_eq!(request.summary, "Built APIs");
    }

    #[test]
    fn test_score_response_omits_absent_disclaimer() {
        let report = crate::ats::scoring::compute_match("React", "React", &[]);
        let response = ScoreResponse {
            report,
            disclaimer: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("disclaimer").is_none());
        assert_eq!(value["report"]["overall"], 100);
    }
}
