// Resume content generation.
// Summary, bullet and keyword generation from raw experience text.
// All LLM calls go through llm_client — no direct model API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
