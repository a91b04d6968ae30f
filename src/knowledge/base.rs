// file: src/knowledge/base.rs
// description: two-level section/subsection knowledge base and its passage walk
// reference: https://docs.rs/config

use crate::config::DEFAULT_CITATION;
use crate::error::{HelperError, Result};
use crate::models::{Passage, passage::subsection_label};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    pub key: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub content: String,
    /// Shared by every subsection; the knowledge base default applies when unset
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub sections: Vec<Section>,
    #[serde(default = "default_citation")]
    pub default_citation: String,
}

fn default_citation() -> String {
    DEFAULT_CITATION.to_string()
}

impl KnowledgeBase {
    pub fn new(sections: Vec<Section>, default_citation: impl Into<String>) -> Result<Self> {
        let kb = Self {
            sections,
            default_citation: default_citation.into(),
        };
        kb.validate()?;
        Ok(kb)
    }

    /// Loads a knowledge base from a TOML file of `[[sections]]` tables.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(HelperError::KnowledgeBase(format!(
                "Knowledge base file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        let kb: KnowledgeBase = settings
            .try_deserialize()
            .map_err(|e| HelperError::KnowledgeBase(e.to_string()))?;

        kb.validate()?;
        info!(
            "Loaded knowledge base from {} ({} sections)",
            path.display(),
            kb.sections.len()
        );
        Ok(kb)
    }

    pub fn citation_for<'a>(&'a self, section: &'a Section) -> &'a str {
        section
            .citation
            .as_deref()
            .unwrap_or(&self.default_citation)
    }

    /// Every passage in declaration order: each section followed by its
    /// subsections, which inherit the section citation.
    pub fn passages(&self) -> Vec<Passage> {
        let mut passages = Vec::with_capacity(self.passage_count());

        for section in &self.sections {
            let citation = self.citation_for(section);
            passages.push(Passage::section(&section.title, &section.content, citation));

            for subsection in &section.subsections {
                passages.push(Passage::subsection(
                    &section.title,
                    &subsection.title,
                    &subsection.content,
                    citation,
                ));
            }
        }

        debug!("Walked knowledge base into {} passages", passages.len());
        passages
    }

    /// Labels of every section and subsection in declaration order.
    pub fn list_topic_titles(&self) -> Vec<String> {
        let mut titles = Vec::with_capacity(self.passage_count());

        for section in &self.sections {
            titles.push(section.title.clone());
            for subsection in &section.subsections {
                titles.push(subsection_label(&section.title, &subsection.title));
            }
        }

        titles
    }

    pub fn passage_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| 1 + s.subsections.len())
            .sum()
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(HelperError::KnowledgeBase(
                "knowledge base has no sections".to_string(),
            ));
        }

        let mut section_keys = HashSet::new();
        for section in &self.sections {
            check_record(&section.key, &section.title, &section.content)?;

            if !section_keys.insert(section.key.as_str()) {
                return Err(HelperError::KnowledgeBase(format!(
                    "duplicate section key: {}",
                    section.key
                )));
            }

            let mut subsection_keys = HashSet::new();
            for subsection in &section.subsections {
                check_record(&subsection.key, &subsection.title, &subsection.content)?;

                if !subsection_keys.insert(subsection.key.as_str()) {
                    return Err(HelperError::KnowledgeBase(format!(
                        "duplicate subsection key {} in section {}",
                        subsection.key, section.key
                    )));
                }
            }
        }

        Ok(())
    }
}

fn check_record(key: &str, title: &str, content: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(HelperError::KnowledgeBase("empty key".to_string()));
    }
    if title.trim().is_empty() {
        return Err(HelperError::KnowledgeBase(format!("empty title for {}", key)));
    }
    if content.trim().is_empty() {
        return Err(HelperError::KnowledgeBase(format!(
            "empty content for {}",
            key
        )));
    }
    Ok(())
}
