// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod knowledge;
pub mod models;
pub mod search;
pub mod server;
pub mod text;
pub mod utils;

pub use config::{Config, KnowledgeConfig, SearchConfig, ServerConfig};
pub use error::{HelperError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use knowledge::{KnowledgeBase, Section, Subsection};
pub use models::{Answer, Passage, PassageLevel, SearchResult};
pub use search::{Ranker, SearchSettings, Thresholds};
pub use server::AppState;
pub use text::{Lemmatizer, Lexicon, Normalizer, StopWords, TokenSet, Tokenizer};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};
