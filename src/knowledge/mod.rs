// file: src/knowledge/mod.rs
// description: knowledge base module exports
// reference: internal module structure

pub mod base;
pub mod builtin;

pub use base::{KnowledgeBase, Section, Subsection};

use crate::config::KnowledgeConfig;
use crate::error::Result;
use tracing::info;

/// Resolves the configured knowledge base, falling back to the built-in data set.
pub fn load(config: &KnowledgeConfig) -> Result<KnowledgeBase> {
    match &config.path {
        // A file carries its own default_citation
        Some(path) => KnowledgeBase::from_file(path),
        None => {
            let mut kb = builtin::new_york();
            kb.default_citation = config.default_citation.clone();
            info!("Using built-in knowledge base ({} passages)", kb.passage_count());
            Ok(kb)
        }
    }
}
