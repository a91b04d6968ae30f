// file: src/text/mod.rs
// description: text normalization module exports
// reference: internal module structure

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use lemmatizer::Lemmatizer;
pub use normalizer::{Lexicon, Normalizer, TokenSet};
pub use stopwords::StopWords;
pub use tokenizer::Tokenizer;
