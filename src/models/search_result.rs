// file: src/models/search_result.rs
// description: Search result model with relevance scores
// reference: Used for ranked passage matches

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Section title, or "<section> - <subsection>" for subsections
    #[serde(alias = "section")]
    pub label: String,

    /// Passage body, whitespace-trimmed
    pub content: String,

    /// Fraction of query tokens found in the passage (0.0-1.0)
    pub score: f64,

    /// Source the passage is drawn from
    pub citation: String,
}

impl SearchResult {
    pub fn new(label: String, content: &str, score: f64, citation: String) -> Self {
        Self {
            label,
            content: content.trim().to_string(),
            score,
            citation,
        }
    }
}
