//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::scoring::MatchReport;
use crate::errors::AppError;
use crate::models::resume::GeneratedContent;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub experience: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: GeneratedContent,
    /// Present only when a non-blank job description was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_report: Option<MatchReport>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Generates summary, bullets and keywords from raw experience text.
/// When a job description is given, the generated content is also scored against it.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.experience.trim().is_empty() {
        return Err(AppError::Validation("Experience is required".to_string()));
    }

    let job_description = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty());

    let content = state
        .content_generator
        .generate(&request.experience, job_description)
        .await?;

    let match_report = job_description.map(|jd| {
        state
            .ats_scorer
            .score(jd, &content.summary, &content.bullets)
    });

    if let Some(report) = &match_report {
        info!("Generated content scored {}/100 ({:?})", report.overall, report.tier);
    }

    Ok(Json(GenerateResponse {
        content,
        match_report,
    }))
}
