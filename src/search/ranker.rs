// file: src/search/ranker.rs
// description: relevance ranking of knowledge base passages against a query
// reference: normalize, score, threshold, stable sort, truncate

use super::scorer::{SearchSettings, relevance};
use crate::config::Config;
use crate::error::Result;
use crate::knowledge::{self, KnowledgeBase};
use crate::models::{Passage, SearchResult};
use crate::text::{Lexicon, Normalizer, TokenSet};
use crate::utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Searches slower than this are logged as warnings and degrade health.
pub const SLOW_SEARCH: Duration = Duration::from_millis(50);

const HEALTH_QUERY: &str = "small claims court";

/// Scores candidates against already-normalized query tokens.
///
/// Candidates must be supplied in declaration order; ties keep that order.
pub fn rank<'a, I>(query: &TokenSet, candidates: I, settings: &SearchSettings) -> Vec<SearchResult>
where
    I: IntoIterator<Item = (&'a Passage, &'a TokenSet)>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = candidates
        .into_iter()
        .filter_map(|(passage, tokens)| {
            let score = relevance(query, tokens);
            settings
                .thresholds
                .admits(passage.level, score)
                .then(|| {
                    SearchResult::new(
                        passage.label.clone(),
                        &passage.body,
                        score,
                        passage.citation.clone(),
                    )
                })
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(settings.max_results);
    results
}

/// Uncached search: normalizes every passage on each call.
pub fn search(
    normalizer: &Normalizer,
    query: &str,
    passages: &[Passage],
    settings: &SearchSettings,
) -> Vec<SearchResult> {
    let query_tokens = normalizer.normalize(query);
    let passage_tokens: Vec<TokenSet> = passages
        .iter()
        .map(|p| normalizer.normalize(&p.body))
        .collect();

    rank(&query_tokens, passages.iter().zip(passage_tokens.iter()), settings)
}

/// Passages with their token sets computed once up front.
///
/// Read-only after construction, so one instance serves concurrent requests.
#[derive(Debug, Clone)]
pub struct Ranker {
    normalizer: Normalizer,
    passages: Vec<Passage>,
    tokens: Vec<TokenSet>,
    topics: Vec<String>,
    settings: SearchSettings,
}

impl Ranker {
    pub fn new(kb: &KnowledgeBase, normalizer: Normalizer, settings: SearchSettings) -> Self {
        let timer = OperationTimer::start("passage indexing");

        let passages = kb.passages();
        let tokens: Vec<TokenSet> = passages
            .iter()
            .map(|p| normalizer.normalize(&p.body))
            .collect();

        timer.finish_with_count(passages.len());

        Self {
            normalizer,
            passages,
            tokens,
            topics: kb.list_topic_titles(),
            settings,
        }
    }

    /// Loads the configured knowledge base and indexes it with the English lexicon.
    pub fn from_config(config: &Config) -> Result<Self> {
        let kb = knowledge::load(&config.knowledge)?;
        let normalizer = Normalizer::new(Arc::new(Lexicon::english()));
        Ok(Self::new(&kb, normalizer, SearchSettings::from(&config.search)))
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let query_tokens = self.normalizer.normalize(query);
        let results = rank(
            &query_tokens,
            self.passages.iter().zip(self.tokens.iter()),
            &self.settings,
        );

        debug!(
            query_tokens = query_tokens.len(),
            results = results.len(),
            "Ranked passages"
        );
        results
    }

    pub fn list_topic_titles(&self) -> &[String] {
        &self.topics
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Checks the index is populated and a sample search finishes within `budget`.
    pub fn health(&self, budget: Duration) -> HealthReport {
        let count = self.passage_count();
        let index = if count > 0 {
            HealthCheck::new(
                "knowledge_base",
                HealthStatus::Healthy,
                format!("{} passages indexed", count),
                Duration::ZERO,
            )
        } else {
            HealthCheck::new(
                "knowledge_base",
                HealthStatus::Unhealthy,
                "no passages indexed",
                Duration::ZERO,
            )
        };

        let start = Instant::now();
        let hits = self.search(HEALTH_QUERY).len();
        let elapsed = start.elapsed();
        let search = if elapsed > budget {
            HealthCheck::new(
                "search",
                HealthStatus::Degraded,
                format!(
                    "sample search exceeded {:.0}ms budget",
                    budget.as_secs_f64() * 1000.0
                ),
                elapsed,
            )
        } else {
            HealthCheck::new(
                "search",
                HealthStatus::Healthy,
                format!("sample search returned {} result(s)", hits),
                elapsed,
            )
        };

        HealthReport::new(env!("CARGO_PKG_VERSION"), vec![index, search])
    }
}
