use std::sync::Arc;

use crate::ats::scoring::AtsScorer;
use crate::generation::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable ATS scorer. Default: KeywordAtsScorer.
    pub ats_scorer: Arc<dyn AtsScorer>,
    /// Pluggable content generator. Default: LlmContentGenerator.
    pub content_generator: Arc<dyn ContentGenerator>,
}
