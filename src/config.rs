// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HelperError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CITATION: &str = "New York State Law";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Ranking knobs. Defaults match the tuning the helper has always shipped with.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub top_level_threshold: f64,
    pub sub_level_threshold: f64,
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KnowledgeConfig {
    /// Alternative knowledge base file; the built-in NY data set is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_citation")]
    pub default_citation: String,
}

fn default_citation() -> String {
    DEFAULT_CITATION.to_string()
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CLAIMS_HELPER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HelperError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HelperError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                request_timeout_secs: 30,
            },
            search: SearchConfig {
                top_level_threshold: 0.2,
                sub_level_threshold: 0.3,
                max_results: 3,
            },
            knowledge: KnowledgeConfig {
                path: None,
                default_citation: default_citation(),
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(HelperError::Config("port cannot be 0".to_string()));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(HelperError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        for (name, value) in [
            ("top_level_threshold", self.search.top_level_threshold),
            ("sub_level_threshold", self.search.sub_level_threshold),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(HelperError::Config(format!(
                    "{} must be within [0, 1), got {}",
                    name, value
                )));
            }
        }

        if self.search.max_results == 0 {
            return Err(HelperError::Config(
                "max_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[server]
host = "0.0.0.0"
port = 8080
request_timeout_secs = 10

[search]
top_level_threshold = 0.25
sub_level_threshold = 0.35
max_results = 5

[knowledge]
default_citation = "NY Law"
"#;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("helper.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.top_level_threshold, 0.25);
        assert_eq!(config.knowledge.default_citation, "NY Law");
        assert!(config.knowledge.path.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("helper.toml");
        fs::write(&path, SAMPLE.replace("0.35", "1.5")).unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("sub_level_threshold"));
    }

    #[test]
    fn test_rejects_zero_max_results() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("helper.toml");
        fs::write(&path, SAMPLE.replace("max_results = 5", "max_results = 0")).unwrap();

        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.knowledge.default_citation, DEFAULT_CITATION);
    }
}
