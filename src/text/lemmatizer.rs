// file: src/text/lemmatizer.rs
// description: rule and dictionary based lemmatizer reducing words to base form
// reference: WordNet morphological processing (noun rules + exception list)

use std::collections::HashMap;

/// Irregular plural forms and words the suffix rules would damage.
const ENGLISH_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("selves", "self"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("media", "medium"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("bases", "basis"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("aliases", "alias"),
    ("biases", "bias"),
    ("canvases", "canvas"),
    ("alias", "alias"),
    ("bias", "bias"),
    ("atlas", "atlas"),
    ("canvas", "canvas"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("means", "means"),
    ("lens", "lens"),
    ("physics", "physics"),
    ("economics", "economics"),
];

/// Suffixes that mark a singular word which must not lose its final `s`.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Sibilant plurals that drop `es` rather than `s`.
const SIBILANT_PLURALS: &[&str] = &["sses", "ches", "shes", "xes", "zes"];

/// Words at or under this many characters are left untouched.
const MIN_INFLECTED_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    pub fn new(exceptions: HashMap<String, String>) -> Self {
        Self { exceptions }
    }

    pub fn english() -> Self {
        Self::new(
            ENGLISH_EXCEPTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }

    /// Reduces a lowercase token to its dictionary base form.
    ///
    /// The exception table wins; otherwise plural suffix rules apply to
    /// alphabetic words. Numbers and mixed tokens come back unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        if !is_inflectable(word) {
            return word.to_string();
        }

        if SINGULAR_ENDINGS.iter().any(|s| word.ends_with(s)) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies")
            && stem.chars().count() > 1
        {
            return format!("{}y", stem);
        }

        if SIBILANT_PLURALS.iter().any(|s| word.ends_with(s)) {
            return word[..word.len() - 2].to_string();
        }

        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }

        word.to_string()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

fn is_inflectable(word: &str) -> bool {
    word.chars().count() > MIN_INFLECTED_LEN
        && word.chars().all(|c| c.is_alphabetic() || c == '-')
        && word.chars().last().is_some_and(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::english().lemmatize(word)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("claims"), "claim");
        assert_eq!(lemma("cases"), "case");
        assert_eq!(lemma("evictions"), "eviction");
        assert_eq!(lemma("fees"), "fee");
        assert_eq!(lemma("late-fees"), "late-fee");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(lemma("parties"), "party");
        assert_eq!(lemma("witnesses"), "witness");
        assert_eq!(lemma("taxes"), "tax");
        assert_eq!(lemma("approaches"), "approach");
        assert_eq!(lemma("premises"), "premise");
    }

    #[test]
    fn test_singular_words_untouched() {
        assert_eq!(lemma("business"), "business");
        assert_eq!(lemma("status"), "status");
        assert_eq!(lemma("basis"), "basis");
        assert_eq!(lemma("claim"), "claim");
    }

    #[test]
    fn test_exceptions() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("people"), "person");
        assert_eq!(lemma("leaves"), "leaf");
        assert_eq!(lemma("news"), "news");
    }

    #[test]
    fn test_exceptions_cover_words_the_rules_would_damage() {
        assert_eq!(lemma("movies"), "movie");
        assert_eq!(lemma("cookies"), "cookie");
        assert_eq!(lemma("buses"), "bus");
        assert_eq!(lemma("gases"), "gas");
        assert_eq!(lemma("canvas"), "canvas");
        assert_eq!(lemma("aliases"), "alias");
    }

    #[test]
    fn test_short_and_numeric_tokens_untouched() {
        assert_eq!(lemma("was"), "was");
        assert_eq!(lemma("has"), "has");
        assert_eq!(lemma("5,000"), "5,000");
        assert_eq!(lemma("14-day"), "14-day");
        assert_eq!(lemma("1990s"), "1990s");
    }

    #[test]
    fn test_custom_exceptions() {
        let mut exceptions = HashMap::new();
        exceptions.insert("llcs".to_string(), "llc".to_string());
        let lemmatizer = Lemmatizer::new(exceptions);
        assert_eq!(lemmatizer.lemmatize("llcs"), "llc");
        assert_eq!(lemmatizer.lemmatize("children"), "children");
    }
}
