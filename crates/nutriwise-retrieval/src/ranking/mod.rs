//! Multi-factor document re-ranking: score → normalize → combine → sort.

pub mod deduplication;
pub mod scorer;

use std::cmp::Ordering;

use tracing::{debug, warn};

use nutriwise_core::config::ReRankingConfig;
use nutriwise_core::document::Document;
use nutriwise_core::traits::IReranker;

use scorer::{
    AuthorityScorer, DocumentScorer, FreshnessScorer, NutritionTermScorer,
    SemanticSimilarityScorer, TermProximityScorer,
};

/// A scorer and the weight its normalized output carries.
pub struct WeightedScorer {
    pub scorer: Box<dyn DocumentScorer>,
    pub weight: f64,
}

/// Combines the scorer family into one ranking using configurable weights.
///
/// Only the first `top_n_to_rerank` candidates are rescored; everything
/// past that index keeps its position and order — a deliberate
/// cost/quality tradeoff for large candidate pools.
pub struct DocumentReRanker {
    config: ReRankingConfig,
    scorers: Vec<WeightedScorer>,
}

impl DocumentReRanker {
    /// Build with the default scorer family, weighted per config.
    pub fn new(config: ReRankingConfig) -> Self {
        let scorers = vec![
            WeightedScorer {
                scorer: Box::new(SemanticSimilarityScorer),
                weight: config.semantic_weight,
            },
            WeightedScorer {
                scorer: Box::new(FreshnessScorer {
                    max_age_days: config.max_age_days,
                }),
                weight: config.freshness_weight,
            },
            WeightedScorer {
                scorer: Box::new(AuthorityScorer::default()),
                weight: config.authority_weight,
            },
            WeightedScorer {
                scorer: Box::new(TermProximityScorer),
                weight: config.term_proximity_weight,
            },
            WeightedScorer {
                scorer: Box::new(NutritionTermScorer),
                weight: config.nutrient_match_bonus,
            },
        ];
        Self { config, scorers }
    }

    /// Build with a custom scorer list.
    pub fn with_scorers(config: ReRankingConfig, scorers: Vec<WeightedScorer>) -> Self {
        Self { config, scorers }
    }

    /// Re-rank the documents by combined weighted score.
    ///
    /// Returns a permutation of the input: the first `top_n_to_rerank`
    /// entries reordered by descending combined score (stable on ties),
    /// followed by the remaining entries unchanged. Zero or one input
    /// documents are returned as-is without invoking any scorer. A
    /// failing scorer, or one returning the wrong number of scores, is
    /// skipped — excluded from both the weighted sum and the weight
    /// total — and a zero weight total yields a combined score of 0 for
    /// every document.
    pub fn rerank(&self, mut documents: Vec<Document>, query: &str) -> Vec<Document> {
        if documents.len() <= 1 {
            return documents;
        }

        let n = self.config.top_n_to_rerank.min(documents.len());
        if n == 0 {
            return documents;
        }
        let remaining = documents.split_off(n);
        let prefix = documents;

        let mut contributions: Vec<(Vec<f64>, f64)> = Vec::new();
        for entry in &self.scorers {
            match entry.scorer.score(&prefix, query) {
                Ok(raw) if raw.len() == prefix.len() => {
                    let max = raw.iter().copied().fold(0.0_f64, f64::max);
                    let max = if max > 0.0 { max } else { 1.0 };
                    let normalized = raw.iter().map(|s| s / max).collect();
                    contributions.push((normalized, entry.weight));
                }
                Ok(raw) => {
                    warn!(
                        scorer = entry.scorer.name(),
                        expected = prefix.len(),
                        got = raw.len(),
                        "scorer returned wrong-length output, skipping"
                    );
                }
                Err(e) => {
                    warn!(scorer = entry.scorer.name(), error = %e, "scorer failed, skipping");
                }
            }
        }

        let total_weight: f64 = contributions.iter().map(|(_, w)| w).sum();
        let combined: Vec<f64> = (0..prefix.len())
            .map(|i| {
                if total_weight > 0.0 {
                    contributions
                        .iter()
                        .map(|(scores, weight)| scores[i] * weight)
                        .sum::<f64>()
                        / total_weight
                } else {
                    0.0
                }
            })
            .collect();

        let mut pairs: Vec<(Document, f64)> = prefix.into_iter().zip(combined).collect();
        // Vec::sort_by is stable, so exact ties keep their input order.
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        debug!(
            reranked = pairs.len(),
            passthrough = remaining.len(),
            top_score = pairs.first().map(|(_, s)| *s).unwrap_or(0.0),
            "reranking complete"
        );

        let mut result: Vec<Document> = pairs.into_iter().map(|(doc, _)| doc).collect();
        result.extend(remaining);
        result
    }
}

impl IReranker for DocumentReRanker {
    fn rerank(&self, documents: Vec<Document>, query: &str) -> Vec<Document> {
        DocumentReRanker::rerank(self, documents, query)
    }
}

impl Default for DocumentReRanker {
    fn default() -> Self {
        Self::new(ReRankingConfig::default())
    }
}
