// file: src/text/tokenizer.rs
// description: word tokenization with contraction splitting and punctuation tokens
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numbers keep inner commas and periods ("5,000", "3.5"). Words are runs of
    // letters/digits joined by inner hyphens, apostrophes or slashes
    // ("non-payment", "don't"). Any other non-whitespace run is punctuation.
    static ref TOKEN: Regex = Regex::new(
        r"\p{N}+(?:[.,]\p{N}+)+|[\p{L}\p{N}]+(?:[-'’/][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]+"
    ).expect("TOKEN regex is valid");
}

/// Clitics split off a word, with the spelling the stop-word list uses.
const CLITICS: &[(&str, &str)] = &[
    ("s", "s"),
    ("re", "re"),
    ("ll", "ll"),
    ("ve", "ve"),
    ("d", "d"),
    ("m", "m"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercases `text` and splits it into word and punctuation tokens.
    ///
    /// Contractions are separated from their host word: `don't` becomes
    /// `do` + `not`, `tenant's` becomes `tenant` + `s`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();

        for m in TOKEN.find_iter(&lowered) {
            let raw = m.as_str().replace('’', "'");
            if raw.contains('\'') {
                split_contraction(&raw, &mut tokens);
            } else {
                tokens.push(raw);
            }
        }

        tokens
    }
}

fn split_contraction(word: &str, out: &mut Vec<String>) {
    if let Some(host) = word.strip_suffix("n't")
        && !host.is_empty()
    {
        out.push(host.to_string());
        out.push("not".to_string());
        return;
    }

    if let Some((host, tail)) = word.rsplit_once('\'')
        && let Some((_, canonical)) = CLITICS.iter().find(|(c, _)| *c == tail)
    {
        if !host.is_empty() {
            out.push(host.to_string());
        }
        out.push((*canonical).to_string());
        return;
    }

    out.push(word.to_string());
}

/// True when the token carries no letters or digits at all.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}
