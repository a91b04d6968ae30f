// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod answer;
pub mod passage;
pub mod search_result;

pub use answer::{Answer, NOT_ENOUGH_INFORMATION};
pub use passage::{Passage, PassageLevel};
pub use search_result::SearchResult;
