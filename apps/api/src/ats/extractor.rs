//! Keyword Extractor — tokenizes free text and classifies tokens against the
//! fixed category vocabularies.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::vocabulary::Category;

/// Anything that is not an ASCII word character or whitespace becomes a separator.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("NON_WORD regex is valid"));

/// Tokens this short or shorter are dropped.
const MIN_TOKEN_LEN: usize = 2;

/// Per-category keywords pulled from one piece of text.
/// De-duplicated, first-seen order, capped per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedKeywords {
    technical: Vec<String>,
    soft: Vec<String>,
    industry: Vec<String>,
}

impl ExtractedKeywords {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Technical => &self.technical,
            Category::Soft => &self.soft,
            Category::Industry => &self.industry,
        }
    }
}

/// Lower-cases `text`, turns punctuation into separators and returns every
/// token longer than two characters, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|token| token.len() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Extracts the technical, soft-skill and industry keywords found in `text`.
///
/// A token is kept for a category when it contains any of the category's
/// patterns. Categories are independent: one token may land in several.
pub fn extract(text: &str) -> ExtractedKeywords {
    let tokens = tokenize(text);

    ExtractedKeywords {
        technical: classify(&tokens, Category::Technical),
        soft: classify(&tokens, Category::Soft),
        industry: classify(&tokens, Category::Industry),
    }
}

fn classify(tokens: &[String], category: Category) -> Vec<String> {
    let patterns = category.patterns();
    let cap = category.extract_cap();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for token in tokens {
        if matched.len() == cap {
            break;
        }
        if patterns.iter().any(|p| token.contains(p)) && seen.insert(token.as_str()) {
            matched.push(token.clone());
        }
    }

    matched
}
