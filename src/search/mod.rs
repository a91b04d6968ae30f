// file: src/search/mod.rs
// description: passage ranking module exports
// reference: internal module structure

pub mod ranker;
pub mod scorer;

pub use ranker::{Ranker, SLOW_SEARCH, rank, search};
pub use scorer::{SearchSettings, Thresholds, relevance};
