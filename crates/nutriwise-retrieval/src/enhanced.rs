//! EnhancedRetriever: query-reformulation fan-out over the hybrid pipeline.
//!
//! Expands one query into alternative phrasings, retrieves per phrasing
//! against the raw base search, deduplicates by content, then applies the
//! hybrid domain filters with the original query.

use tracing::{debug, info, warn};

use nutriwise_core::config::RetrieverConfig;
use nutriwise_core::document::Document;
use nutriwise_core::traits::{ICompletion, IRetriever, ISimilaritySearch};

use crate::engine::HybridRetriever;
use crate::expansion::QueryReformulator;
use crate::ranking::deduplication::deduplicate;

/// Composes a [`HybridRetriever`] with a [`QueryReformulator`].
///
/// With reformulation disabled or no reformulator attached, it delegates
/// entirely to the hybrid pipeline.
pub struct EnhancedRetriever<'a> {
    hybrid: HybridRetriever<'a>,
    reformulator: Option<QueryReformulator<'a>>,
}

impl<'a> EnhancedRetriever<'a> {
    pub fn new(hybrid: HybridRetriever<'a>) -> Self {
        Self {
            hybrid,
            reformulator: None,
        }
    }

    /// Attach a query reformulator.
    pub fn with_reformulator(mut self, reformulator: QueryReformulator<'a>) -> Self {
        self.reformulator = Some(reformulator);
        self
    }

    /// Build a fully-wired enhanced retriever from a base search and a
    /// completion model.
    pub fn from_completion(
        base: &'a dyn ISimilaritySearch,
        llm: &'a dyn ICompletion,
        config: RetrieverConfig,
    ) -> Self {
        let include_original = config.include_original;
        Self {
            hybrid: HybridRetriever::new(base, config),
            reformulator: Some(
                QueryReformulator::new(llm).with_include_original(include_original),
            ),
        }
    }

    /// Run the fan-out pipeline for one query.
    pub fn retrieve(&self, query: &str) -> Vec<Document> {
        let config = self.hybrid.config();
        let Some(reformulator) = self.reformulator.as_ref() else {
            return self.hybrid.retrieve(query);
        };
        if !config.use_reformulation {
            return self.hybrid.retrieve(query);
        }

        // Reformulation failure must never abort retrieval.
        let mut queries = match reformulator.rewrite_query(query) {
            Ok(queries) => queries,
            Err(e) => {
                warn!(error = %e, "query reformulation failed, using original query only");
                vec![query.to_string()]
            }
        };
        queries.truncate(config.max_queries);

        let mut all_docs = Vec::new();
        for alt_query in &queries {
            match self.hybrid.base.search(alt_query) {
                Ok(docs) => {
                    debug!(count = docs.len(), query = %alt_query, "fan-out search");
                    all_docs.extend(docs);
                }
                Err(e) => {
                    warn!(query = %alt_query, error = %e, "fan-out search failed for query");
                }
            }
        }

        let unique = deduplicate(all_docs);
        debug!(unique = unique.len(), "deduplicated fan-out results");

        // Intent and keyword signals come from the original query, not
        // the alternatives.
        let mut filtered = self.hybrid.apply_domain_filters(unique, query);
        let total = filtered.len();
        filtered.truncate(config.k);

        info!(
            queries = queries.len(),
            filtered = total,
            returned = filtered.len(),
            query,
            "enhanced retrieval complete"
        );
        filtered
    }
}

impl IRetriever for EnhancedRetriever<'_> {
    fn retrieve(&self, query: &str) -> Vec<Document> {
        EnhancedRetriever::retrieve(self, query)
    }
}
