use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{RetrievalError, RetrievalResult};

/// Retriever configuration, shared by the hybrid and enhanced retrievers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieverConfig {
    /// Number of documents to return.
    pub k: usize,
    /// Cap on the reformulated-query list in the fan-out path.
    pub max_queries: usize,
    /// Whether the original query is prepended to reformulations.
    pub include_original: bool,
    /// Whether the enhanced retriever runs reformulation at all.
    pub use_reformulation: bool,
    /// Whether an attached re-ranker is applied to the filtered list.
    pub use_reranking: bool,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            k: constants::DEFAULT_K,
            max_queries: constants::DEFAULT_MAX_QUERIES,
            include_original: true,
            use_reformulation: true,
            use_reranking: true,
        }
    }
}

impl RetrieverConfig {
    /// Load overrides from a TOML string. Missing keys keep defaults.
    pub fn from_toml_str(raw: &str) -> RetrievalResult<Self> {
        toml::from_str(raw).map_err(|e| RetrievalError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}

/// Re-ranking configuration: per-scorer weights and cost controls.
///
/// Weights are not validated to sum to 1 — the combination formula
/// re-normalizes by the weight sum, so any positive scale works. An
/// all-zero weight set yields a combined score of 0 for every document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReRankingConfig {
    /// Weight for the semantic-similarity scorer.
    pub semantic_weight: f64,
    /// Weight for the freshness scorer.
    pub freshness_weight: f64,
    /// Weight for the source-authority scorer.
    pub authority_weight: f64,
    /// Weight for the term-proximity scorer.
    pub term_proximity_weight: f64,
    /// Weight for the nutrition domain-term scorer.
    pub nutrient_match_bonus: f64,
    /// Maximum document age (days) for freshness scoring.
    pub max_age_days: i64,
    /// Only the first N candidates are rescored; the rest keep their
    /// positions. Caps cost on large candidate pools.
    pub top_n_to_rerank: usize,
}

impl Default for ReRankingConfig {
    fn default() -> Self {
        Self {
            semantic_weight: 0.6,
            freshness_weight: 0.1,
            authority_weight: 0.15,
            term_proximity_weight: 0.15,
            nutrient_match_bonus: 0.2,
            max_age_days: constants::DEFAULT_MAX_AGE_DAYS,
            top_n_to_rerank: constants::DEFAULT_TOP_N_TO_RERANK,
        }
    }
}

impl ReRankingConfig {
    /// Load overrides from a TOML string. Missing keys keep defaults.
    pub fn from_toml_str(raw: &str) -> RetrievalResult<Self> {
        toml::from_str(raw).map_err(|e| RetrievalError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
