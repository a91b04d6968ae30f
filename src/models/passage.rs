// file: src/models/passage.rs
// description: immutable passage of legal guidance text with its citation
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassageLevel {
    Section,
    Subsection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// Display label, "<section>" or "<section> - <subsection>"
    pub label: String,

    pub title: String,

    /// Title of the owning top-level section; None for sections themselves
    pub section: Option<String>,

    pub level: PassageLevel,

    pub body: String,

    pub citation: String,
}

impl Passage {
    pub fn section(title: &str, body: &str, citation: &str) -> Self {
        Self {
            label: title.to_string(),
            title: title.to_string(),
            section: None,
            level: PassageLevel::Section,
            body: body.to_string(),
            citation: citation.to_string(),
        }
    }

    pub fn subsection(section_title: &str, title: &str, body: &str, citation: &str) -> Self {
        Self {
            label: subsection_label(section_title, title),
            title: title.to_string(),
            section: Some(section_title.to_string()),
            level: PassageLevel::Subsection,
            body: body.to_string(),
            citation: citation.to_string(),
        }
    }

    pub fn is_subsection(&self) -> bool {
        self.level == PassageLevel::Subsection
    }
}

pub fn subsection_label(section_title: &str, title: &str) -> String {
    format!("{} - {}", section_title, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_passage() {
        let passage = Passage::section("Auto Law", "Lemon laws.", "AG Guide");
        assert_eq!(passage.label, "Auto Law");
        assert_eq!(passage.level, PassageLevel::Section);
        assert!(passage.section.is_none());
        assert!(!passage.is_subsection());
    }

    #[test]
    fn test_subsection_passage() {
        let passage = Passage::subsection("Auto Law", "Auto Repairs", "Estimates.", "AG Guide");
        assert_eq!(passage.label, "Auto Law - Auto Repairs");
        assert_eq!(passage.section.as_deref(), Some("Auto Law"));
        assert_eq!(passage.citation, "AG Guide");
        assert!(passage.is_subsection());
    }
}
