//! Document scoring strategies for re-ranking.
//!
//! Each scorer maps (documents, query) to one score per document, in
//! input order, intended to land in [0, 1]. Scorers are independent and
//! deterministic; the re-ranker normalizes and combines their outputs.

use chrono::Utc;

use nutriwise_core::document::Document;
use nutriwise_core::errors::RetrievalResult;

/// A single scoring strategy.
///
/// `score` must return exactly one value per input document, in order.
/// A scorer that fails is skipped by the re-ranker for that call.
pub trait DocumentScorer: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, documents: &[Document], query: &str) -> RetrievalResult<Vec<f64>>;
}

/// Semantic relevance via keyword overlap.
///
/// The embedding-similarity ranking already happened upstream, so this
/// scorer is a cheap text proxy: the fraction of query terms present in
/// the content. It exists as the seam where a model-backed scorer can be
/// substituted later.
#[derive(Debug, Clone, Default)]
pub struct SemanticSimilarityScorer;

impl DocumentScorer for SemanticSimilarityScorer {
    fn name(&self) -> &'static str {
        "semantic_similarity"
    }

    fn score(&self, documents: &[Document], query: &str) -> RetrievalResult<Vec<f64>> {
        let terms: Vec<String> = query.to_lowercase().split_whitespace().map(str::to_string).collect();
        let scores = documents
            .iter()
            .map(|doc| {
                let content = doc.content.to_lowercase();
                let matches = terms.iter().filter(|t| content.contains(t.as_str())).count();
                matches as f64 / terms.len().max(1) as f64
            })
            .collect();
        Ok(scores)
    }
}

/// Scores documents by recency of their metadata date.
#[derive(Debug, Clone)]
pub struct FreshnessScorer {
    /// Age (days) at which the score reaches zero.
    pub max_age_days: i64,
}

impl Default for FreshnessScorer {
    fn default() -> Self {
        Self { max_age_days: 365 }
    }
}

impl DocumentScorer for FreshnessScorer {
    fn name(&self) -> &'static str {
        "freshness"
    }

    fn score(&self, documents: &[Document], _query: &str) -> RetrievalResult<Vec<f64>> {
        let now = Utc::now();
        let scores = documents
            .iter()
            .map(|doc| match doc.metadata.timestamp() {
                Some(date) => {
                    let age_days = (now - date).num_days() as f64;
                    (1.0 - age_days / self.max_age_days as f64).max(0.0)
                }
                // Missing or unparsable date is neutral, not penalized.
                None => 0.5,
            })
            .collect();
        Ok(scores)
    }
}

/// Scores documents by the trust weight of their source.
///
/// The source list is ordered: exact `source` matches win, then the first
/// entry whose domain appears in the `url` (order makes substring ties
/// deterministic). Unknown sources score a neutral 0.5.
#[derive(Debug, Clone)]
pub struct AuthorityScorer {
    pub sources: Vec<(String, f64)>,
}

impl AuthorityScorer {
    pub fn with_sources(sources: Vec<(String, f64)>) -> Self {
        Self { sources }
    }
}

impl Default for AuthorityScorer {
    fn default() -> Self {
        let sources = [
            ("nih.gov", 0.9),
            ("cdc.gov", 0.9),
            ("mayoclinic.org", 0.85),
            ("harvard.edu", 0.85),
            ("who.int", 0.9),
            ("nutrition.org", 0.8),
            ("nutritionfacts.org", 0.75),
        ]
        .into_iter()
        .map(|(d, s)| (d.to_string(), s))
        .collect();
        Self { sources }
    }
}

impl DocumentScorer for AuthorityScorer {
    fn name(&self) -> &'static str {
        "authority"
    }

    fn score(&self, documents: &[Document], _query: &str) -> RetrievalResult<Vec<f64>> {
        let scores = documents
            .iter()
            .map(|doc| {
                let meta = &doc.metadata;
                if let Some(source) = meta.source.as_deref() {
                    if let Some((_, auth)) = self.sources.iter().find(|(d, _)| d == source) {
                        return *auth;
                    }
                }
                if let Some(url) = meta.url.as_deref() {
                    if let Some((_, auth)) = self.sources.iter().find(|(d, _)| url.contains(d.as_str())) {
                        return *auth;
                    }
                }
                0.5
            })
            .collect();
        Ok(scores)
    }
}

/// Scores documents by how often query terms appear near each other.
///
/// Slides a 10-word window across the content and counts windows holding
/// at least two query terms. Queries with fewer than two terms longer
/// than two characters are scored neutrally.
#[derive(Debug, Clone, Default)]
pub struct TermProximityScorer;

const PROXIMITY_WINDOW_WORDS: usize = 10;

impl DocumentScorer for TermProximityScorer {
    fn name(&self) -> &'static str {
        "term_proximity"
    }

    fn score(&self, documents: &[Document], query: &str) -> RetrievalResult<Vec<f64>> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .filter(|t| t.len() > 2)
            .map(str::to_string)
            .collect();

        if terms.len() < 2 {
            return Ok(vec![0.5; documents.len()]);
        }

        let scores = documents
            .iter()
            .map(|doc| {
                let content = doc.content.to_lowercase();
                let words: Vec<&str> = content.split_whitespace().collect();
                if words.len() < PROXIMITY_WINDOW_WORDS {
                    return 0.5;
                }

                let mut windows_found = 0usize;
                for window in words.windows(PROXIMITY_WINDOW_WORDS) {
                    let joined = window.join(" ");
                    let terms_in_window =
                        terms.iter().filter(|t| joined.contains(t.as_str())).count();
                    if terms_in_window >= 2 {
                        windows_found += 1;
                    }
                }

                if windows_found > 0 {
                    (0.5 + 0.1 * windows_found as f64).min(1.0)
                } else {
                    0.5
                }
            })
            .collect();
        Ok(scores)
    }
}

/// Nutrition domain-term matching.
///
/// When the query mentions any term from a fixed nutrition vocabulary,
/// documents are scored by the fraction of those same terms they contain,
/// boosted into [0.5, 1.0]. Queries without domain terms are neutral.
#[derive(Debug, Clone, Default)]
pub struct NutritionTermScorer;

const NUTRITION_VOCABULARY: &[&str] = &[
    "vitamin",
    "mineral",
    "protein",
    "carbohydrate",
    "fat",
    "omega",
    "calcium",
    "iron",
    "zinc",
    "magnesium",
    "potassium",
    "sodium",
    "fiber",
    "nutrient",
    "diet",
    "calorie",
    "supplement",
    "deficiency",
    "meal",
    "nutrition",
    "food",
    "health",
    "metabolism",
];

impl DocumentScorer for NutritionTermScorer {
    fn name(&self) -> &'static str {
        "nutrition_terms"
    }

    fn score(&self, documents: &[Document], query: &str) -> RetrievalResult<Vec<f64>> {
        let q = query.to_lowercase();
        let query_terms: Vec<&str> = NUTRITION_VOCABULARY
            .iter()
            .copied()
            .filter(|t| q.contains(t))
            .collect();

        if query_terms.is_empty() {
            return Ok(vec![0.5; documents.len()]);
        }

        let scores = documents
            .iter()
            .map(|doc| {
                let content = doc.content.to_lowercase();
                let matches = query_terms.iter().filter(|t| content.contains(**t)).count();
                if matches > 0 {
                    (0.5 + matches as f64 / query_terms.len() as f64 * 0.5).min(1.0)
                } else {
                    0.5
                }
            })
            .collect();
        Ok(scores)
    }
}
