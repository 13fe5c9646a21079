// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.
//
// Placeholders: {experience}, {job_description_block}, {json_array_only}.
// {job_description_block} is empty when no job description was supplied.

/// Sampling temperature for the summary and bullet calls.
pub const CREATIVE_TEMPERATURE: f32 = 0.7;
/// Sampling temperature for keyword extraction.
pub const EXTRACTION_TEMPERATURE: f32 = 0.3;

pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Create a compelling professional summary based on the following experience.

Experience: {experience}
{job_description_block}

Requirements:
- 2-3 sentences maximum
- Highlight key achievements and skills
- Use action-oriented language
- Include relevant keywords from job description if provided
- Focus on value proposition

Return only the professional summary text, no additional formatting."#;

pub const BULLETS_PROMPT_TEMPLATE: &str = r#"Transform the following experience into 4-6 powerful bullet points using the STAR method (Situation, Task, Action, Result).

Experience: {experience}
{job_description_block}

Requirements:
- Start each bullet with a strong action verb
- Include specific metrics and numbers where possible
- Use STAR method structure
- Optimize for ATS keywords from job description if provided
- Each bullet should be 1-2 lines maximum
- Focus on achievements, not just responsibilities

{json_array_only}"#;

pub const KEYWORDS_PROMPT_TEMPLATE: &str = r#"Extract the most important professional keywords and skills from the following content. Focus on technical skills, tools, methodologies, and industry terms.

Experience: {experience}
{job_description_block}

Requirements:
- Return 8-12 relevant keywords
- Include technical skills, tools, and methodologies
- Prioritize keywords from job description if provided
- Use industry-standard terminology
- Avoid generic words like "team" or "work"

{json_array_only}"#;
