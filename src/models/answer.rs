// file: src/models/answer.rs
// description: composed answer returned to the asker
// reference: internal data structures

use super::SearchResult;
use serde::{Deserialize, Serialize};

pub const NOT_ENOUGH_INFORMATION: &str = "I don't have enough information to answer your question. \
Please try asking something about small claims court procedures, collections, landlord-tenant law, \
auto law, or statute of limitations in New York State.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub results: Vec<SearchResult>,
}

impl Answer {
    /// Builds the human-readable reply: a restatement of the question, then
    /// each result's content and source.
    pub fn compose(question: &str, results: Vec<SearchResult>) -> Self {
        if results.is_empty() {
            return Self {
                answer: NOT_ENOUGH_INFORMATION.to_string(),
                results,
            };
        }

        let mut answer = format!(
            "Based on your question about {}, here's what I found:\n\n",
            question
        );
        for result in &results {
            answer.push_str(&format!(
                "{}\n\nSource: {}\n\n",
                result.content, result.citation
            ));
        }

        Self { answer, results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
