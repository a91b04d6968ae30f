// file: src/search/scorer.rs
// description: lexical relevance scoring and per-level thresholds
// reference: token overlap relative to query size

use crate::config::SearchConfig;
use crate::models::PassageLevel;
use crate::text::TokenSet;
use serde::{Deserialize, Serialize};

/// Minimum scores a passage must strictly exceed to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub top_level: f64,
    pub sub_level: f64,
}

impl Thresholds {
    pub fn for_level(&self, level: PassageLevel) -> f64 {
        match level {
            PassageLevel::Section => self.top_level,
            PassageLevel::Subsection => self.sub_level,
        }
    }

    pub fn admits(&self, level: PassageLevel, score: f64) -> bool {
        score > self.for_level(level)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            top_level: 0.2,
            sub_level: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub thresholds: Thresholds,
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            max_results: 3,
        }
    }
}

impl From<&SearchConfig> for SearchSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            thresholds: Thresholds {
                top_level: config.top_level_threshold,
                sub_level: config.sub_level_threshold,
            },
            max_results: config.max_results,
        }
    }
}

/// Fraction of the query's distinct tokens that also occur in the passage.
///
/// Passage length never raises the score. Returns 0.0 when either set is empty.
pub fn relevance(query: &TokenSet, passage: &TokenSet) -> f64 {
    if query.is_empty() || passage.is_empty() {
        return 0.0;
    }

    query.overlap(passage) as f64 / query.len() as f64
}
