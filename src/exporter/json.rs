// file: src/exporter/json.rs
// description: json export of the knowledge base passages and topic list

use crate::error::{HelperError, Result};
use crate::knowledge::KnowledgeBase;
use crate::models::Passage;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_passages: usize,
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TopicsExport<'a> {
    topics: &'a [String],
}

#[derive(Debug, Serialize)]
struct PassagesExport<'a> {
    default_citation: &'a str,
    passages: &'a [Passage],
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| HelperError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    /// Writes `passages.json`, `topics.json` and `manifest.json`.
    pub fn export_all(&self, kb: &KnowledgeBase, pretty: bool) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let passages = kb.passages();
        let topics = kb.list_topic_titles();

        let mut files = Vec::new();
        files.push(self.write(
            "passages.json",
            &PassagesExport {
                default_citation: &kb.default_citation,
                passages: &passages,
            },
            pretty,
        )?);
        files.push(self.write("topics.json", &TopicsExport { topics: &topics }, pretty)?);

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_passages: passages.len(),
            files,
        };
        self.write("manifest.json", &manifest, pretty)?;

        info!(
            "Export complete: {} passages exported",
            manifest.total_passages
        );
        Ok(manifest)
    }

    fn write<T: Serialize>(&self, name: &str, value: &T, pretty: bool) -> Result<String> {
        let path = self.output_dir.join(name);
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        write_file(&path, &json)?;
        Ok(name.to_string())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| HelperError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}
