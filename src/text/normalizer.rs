// file: src/text/normalizer.rs
// description: text normalization into a canonical set of content-bearing tokens
// reference: tokenize, drop punctuation, lemmatize, drop stop words

use super::lemmatizer::Lemmatizer;
use super::stopwords::StopWords;
use super::tokenizer::{Tokenizer, is_punctuation};
use serde::Serialize;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::sync::Arc;

/// Read-only language resources shared by every normalizer in the process.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub stop_words: StopWords,
    pub lemmatizer: Lemmatizer,
}

impl Lexicon {
    pub fn new(stop_words: StopWords, lemmatizer: Lemmatizer) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }

    pub fn english() -> Self {
        Self::new(StopWords::english(), Lemmatizer::english())
    }
}

/// Distinct normalized tokens of a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of tokens present in both sets.
    pub fn overlap(&self, other: &TokenSet) -> usize {
        self.0.intersection(&other.0).count()
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    tokenizer: Tokenizer,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn english() -> Self {
        Self::new(Arc::new(Lexicon::english()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Converts raw text into its set of lemmatized, stop-word-free tokens.
    ///
    /// A token is dropped when either its surface form or its lemma is a
    /// stop word. Empty or whitespace-only input yields an empty set.
    pub fn normalize(&self, text: &str) -> TokenSet {
        let stop_words = &self.lexicon.stop_words;

        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|token| !is_punctuation(token))
            .filter(|token| !stop_words.contains(token))
            .map(|token| self.lexicon.lemmatizer.lemmatize(&token))
            .filter(|lemma| !stop_words.contains(lemma))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}
