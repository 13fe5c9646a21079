//! Fixed keyword vocabularies and per-category caps.
//!
//! Patterns are matched as substrings of tokens, so "react" also catches
//! "reactive" and "art" would catch "start". Hyphenated patterns never match
//! because the tokenizer splits on '-'; they are kept for parity with the
//! published lists.

use serde::{Deserialize, Serialize};

/// One of the three keyword classes a job description is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Soft,
    Industry,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 3] = [Category::Technical, Category::Soft, Category::Industry];

    /// Ordered lowercase patterns for this category.
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Category::Technical => TECHNICAL_PATTERNS,
            Category::Soft => SOFT_SKILL_PATTERNS,
            Category::Industry => INDUSTRY_PATTERNS,
        }
    }

    /// Max distinct keywords kept per extraction.
    pub fn extract_cap(&self) -> usize {
        match self {
            Category::Technical => 10,
            Category::Soft | Category::Industry => 8,
        }
    }

    /// Max job keywords listed as missing in a report.
    pub fn gap_cap(&self) -> usize {
        match self {
            Category::Technical => 6,
            Category::Soft | Category::Industry => 4,
        }
    }
}

const TECHNICAL_PATTERNS: &[&str] = &[
    "react",
    "javascript",
    "typescript",
    "python",
    "java",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "node",
    "express",
    "mongodb",
    "postgresql",
    "git",
    "agile",
    "scrum",
    "api",
    "rest",
    "graphql",
    "html",
    "css",
    "tailwind",
    "bootstrap",
    "vue",
    "angular",
    "next",
    "nuxt",
    "firebase",
    "azure",
];

const SOFT_SKILL_PATTERNS: &[&str] = &[
    "leadership",
    "management",
    "communication",
    "collaboration",
    "teamwork",
    "problem-solving",
    "analytical",
    "creative",
    "strategic",
    "organized",
    "detail-oriented",
    "adaptable",
];

const INDUSTRY_PATTERNS: &[&str] = &[
    "marketing",
    "sales",
    "finance",
    "accounting",
    "healthcare",
    "education",
    "consulting",
    "engineering",
    "design",
    "product",
    "project",
    "business",
    "operations",
    "strategy",
];
