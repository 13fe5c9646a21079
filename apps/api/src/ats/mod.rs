// ATS Match Engine
// Keyword extraction, per-category matching and score aggregation.
// Pure and synchronous — no LLM calls, no I/O.

pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod scoring;
pub mod vocabulary;
