// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt shared by every resume-writing call.
pub const RESUME_WRITER_SYSTEM: &str = "You are a professional resume writer. \
    You write concise, achievement-focused resume content. \
    Never invent employers, dates, degrees, or metrics that are not supported by the input.";

/// Appended to prompts whose reply must be a bare JSON array of strings.
pub const JSON_ARRAY_ONLY: &str = "Return only a JSON array of strings. \
    Do NOT use markdown code fences. \
    Do NOT include any text outside the JSON array.";
