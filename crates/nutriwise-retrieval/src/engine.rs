//! HybridRetriever: domain-aware re-ordering over a base similarity search.
//!
//! Pure pipeline per call: base search → intent detection → keyword
//! scoring → metadata boosting → (optional re-ranking) → top-k.

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use nutriwise_core::config::RetrieverConfig;
use nutriwise_core::document::Document;
use nutriwise_core::traits::{IReranker, IRetriever, ISimilaritySearch};

use crate::intent::IntentEngine;
use crate::keyword;

/// Wraps a base similarity search and re-orders its candidates with
/// query-intent, keyword, and metadata signals.
///
/// Holds no mutable state; concurrent calls are safe as long as the base
/// search client is.
pub struct HybridRetriever<'a> {
    pub(crate) base: &'a dyn ISimilaritySearch,
    intent_engine: IntentEngine,
    config: RetrieverConfig,
    reranker: Option<&'a dyn IReranker>,
}

impl<'a> HybridRetriever<'a> {
    pub fn new(base: &'a dyn ISimilaritySearch, config: RetrieverConfig) -> Self {
        Self {
            base,
            intent_engine: IntentEngine::new(),
            config,
            reranker: None,
        }
    }

    /// Attach a re-ranker, applied to the filtered list when
    /// `config.use_reranking` is set.
    pub fn with_reranker(mut self, reranker: &'a dyn IReranker) -> Self {
        self.reranker = Some(reranker);
        self
    }

    pub(crate) fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Run the hybrid pipeline for one query.
    ///
    /// A failing base search is logged and yields an empty result — total
    /// retrieval failure produces empty context, never an error.
    pub fn retrieve(&self, query: &str) -> Vec<Document> {
        let candidates = match self.base.search(query) {
            Ok(docs) => docs,
            Err(e) => {
                warn!(error = %e, "base similarity search failed");
                return Vec::new();
            }
        };
        debug!(candidates = candidates.len(), "base search returned candidates");

        let retrieved = candidates.len();
        let mut filtered = self.apply_domain_filters(candidates, query);
        let total = filtered.len();
        filtered.truncate(self.config.k);

        info!(
            retrieved,
            filtered = total,
            returned = filtered.len(),
            query,
            "hybrid retrieval complete"
        );
        filtered
    }

    /// Re-order candidates by intent-aware keyword and metadata signals.
    ///
    /// Each document gets `final = (1 + keyword) × (1 + boost)` and the
    /// list is sorted descending; an attached re-ranker then reorders the
    /// already-filtered list.
    pub(crate) fn apply_domain_filters(
        &self,
        documents: Vec<Document>,
        query: &str,
    ) -> Vec<Document> {
        if documents.is_empty() {
            return documents;
        }

        let intent = self.intent_engine.classify(query);
        let keyword_scores = keyword::keyword_scores(&documents, query);

        let mut scored: Vec<(Document, f64)> = documents
            .into_iter()
            .zip(keyword_scores)
            .map(|(doc, kw)| {
                let boost = self.intent_engine.metadata_boost(&doc, &intent);
                let final_score = (1.0 + kw) * (1.0 + boost);
                (doc, final_score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        let ordered: Vec<Document> = scored.into_iter().map(|(doc, _)| doc).collect();

        match self.reranker {
            Some(reranker) if self.config.use_reranking => reranker.rerank(ordered, query),
            _ => ordered,
        }
    }
}

impl IRetriever for HybridRetriever<'_> {
    fn retrieve(&self, query: &str) -> Vec<Document> {
        HybridRetriever::retrieve(self, query)
    }
}
