//! Resume Generation — turns raw experience text into summary, bullets and keywords.
//!
//! Flow: validate → three LLM calls (summary, bullets, keywords) in parallel →
//!       structured parse with heuristic fallback → GeneratedContent.
//!
//! Scoring is not done here; the handler hands the result to the ATS scorer.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{
    BULLETS_PROMPT_TEMPLATE, CREATIVE_TEMPERATURE, EXTRACTION_TEMPERATURE,
    KEYWORDS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ARRAY_ONLY, RESUME_WRITER_SYSTEM};
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::models::resume::GeneratedContent;

/// Max bullets kept when the reply has to be split heuristically.
const MAX_FALLBACK_BULLETS: usize = 6;
/// Max keywords kept when the reply has to be split heuristically.
const MAX_FALLBACK_KEYWORDS: usize = 12;

/// Leading "- ", "* ", "1. " or "2) " list markers.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*]|\d+[.)])\s+").expect("LIST_MARKER regex is valid"));

/// `{experience}`, `{job_description_block}` or `{json_array_only}` in a prompt template.
static PROMPT_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(experience|job_description_block|json_array_only)\}")
        .expect("PROMPT_PLACEHOLDER regex is valid")
});

/// The model reply was not the JSON array of strings we asked for.
#[derive(Debug, Error)]
#[error("reply is not a JSON array of strings: {0}")]
pub struct ParseError(#[from] serde_json::Error);

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces resume content from raw experience text.
///
/// Carried in `AppState` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        experience: &str,
        job_description: Option<&str>,
    ) -> Result<GeneratedContent, AppError>;
}

/// Default generator backed by the chat-completions client.
pub struct LlmContentGenerator(pub LlmClient);

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(
        &self,
        experience: &str,
        job_description: Option<&str>,
    ) -> Result<GeneratedContent, AppError> {
        generate_content(&self.0, experience, job_description).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates a summary, STAR bullets and keywords for `experience`,
/// tailored to `job_description` when one is given.
pub async fn generate_content(
    llm: &LlmClient,
    experience: &str,
    job_description: Option<&str>,
) -> Result<GeneratedContent, AppError> {
    if experience.trim().is_empty() {
        return Err(AppError::Validation("Experience is required".to_string()));
    }
    let job_description = job_description.filter(|jd| !jd.trim().is_empty());

    info!(
        "Generating resume content ({} chars of experience, job description: {})",
        experience.len(),
        job_description.is_some()
    );

    let summary_prompt = build_prompt(SUMMARY_PROMPT_TEMPLATE, experience, job_description);
    let bullets_prompt = build_prompt(BULLETS_PROMPT_TEMPLATE, experience, job_description);
    let keywords_prompt = build_prompt(KEYWORDS_PROMPT_TEMPLATE, experience, job_description);

    let (summary, bullets_text, keywords_text) = tokio::try_join!(
        llm.call_text(&summary_prompt, Some(RESUME_WRITER_SYSTEM), CREATIVE_TEMPERATURE),
        llm.call_text(&bullets_prompt, Some(RESUME_WRITER_SYSTEM), CREATIVE_TEMPERATURE),
        llm.call_text(&keywords_prompt, Some(RESUME_WRITER_SYSTEM), EXTRACTION_TEMPERATURE),
    )?;

    let bullets = parse_bullets(&bullets_text);
    let keywords = parse_keywords(&keywords_text);

    info!(
        "Generated resume content: {} bullets, {} keywords (model: {})",
        bullets.len(),
        keywords.len(),
        llm.model()
    );

    Ok(GeneratedContent {
        summary: summary.trim().to_string(),
        bullets,
        keywords,
    })
}

/// Fills a prompt template with the experience and optional job description.
/// Placeholders are substituted in one pass, so user text is never re-expanded.
fn build_prompt(template: &str, experience: &str, job_description: Option<&str>) -> String {
    let job_description_block = job_description
        .map(|jd| format!("Job Description: {jd}"))
        .unwrap_or_default();

    PROMPT_PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "experience" => experience.to_string(),
            "job_description_block" => job_description_block.clone(),
            _ => JSON_ARRAY_ONLY.to_string(),
        })
        .into_owned()
}

// ────────────────────────────────────────────────────────────────────────────
// Reply parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses a reply as a JSON array of strings (code fences allowed).
/// Items are trimmed and blanks dropped.
pub fn parse_string_array(text: &str) -> Result<Vec<String>, ParseError> {
    let items: Vec<String> = serde_json::from_str(strip_json_fences(text))?;
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Structured bullets, or a best-effort split when the reply is not JSON.
pub fn parse_bullets(text: &str) -> Vec<String> {
    parse_string_array(text).unwrap_or_else(|e| {
        warn!("Bullet reply was not structured ({e}); falling back to line split");
        split_bullets_heuristically(text)
    })
}

/// Structured keywords, or a best-effort split when the reply is not JSON.
pub fn parse_keywords(text: &str) -> Vec<String> {
    parse_string_array(text).unwrap_or_else(|e| {
        warn!("Keyword reply was not structured ({e}); falling back to comma split");
        split_keywords_heuristically(text)
    })
}

/// Splits on '•' and newlines, strips list markers, keeps at most six.
pub fn split_bullets_heuristically(text: &str) -> Vec<String> {
    text.split(|c: char| c == '•' || c == '\n')
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_FALLBACK_BULLETS)
        .collect()
}

/// Splits on commas and newlines, strips quotes, keeps at most twelve.
pub fn split_keywords_heuristically(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c == '\n')
        .map(|item| item.trim().replace(|c: char| c == '"' || c == '\'', ""))
        .filter(|item| !item.is_empty())
        .take(MAX_FALLBACK_KEYWORDS)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
