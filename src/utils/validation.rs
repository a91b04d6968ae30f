// file: src/utils/validation.rs
// description: input validation and text helpers
// reference: input validation patterns

use crate::error::{HelperError, Result};

/// Longest question accepted from a client, in characters.
pub const MAX_QUESTION_CHARS: usize = 2000;

pub struct Validator;

impl Validator {
    /// Returns the trimmed question, rejecting missing or blank input.
    pub fn validate_question(question: Option<&str>) -> Result<&str> {
        let question = question.map(str::trim).unwrap_or_default();

        if question.is_empty() {
            return Err(HelperError::Validation("No question provided".to_string()));
        }

        if question.chars().count() > MAX_QUESTION_CHARS {
            return Err(HelperError::Validation(format!(
                "Question too long (max {} characters)",
                MAX_QUESTION_CHARS
            )));
        }

        Ok(question)
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(HelperError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let cut: String = text.chars().take(max_chars).collect();
            format!("{}...", cut)
        }
    }

    /// Escapes text for inclusion in HTML element content or quoted attributes.
    pub fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
