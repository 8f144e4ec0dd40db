use nutriwise_core::config::ReRankingConfig;
use nutriwise_core::document::{Document, DocumentMetadata};
use nutriwise_core::intent::Intent;
use nutriwise_retrieval::expansion::parse_line_list;
use nutriwise_retrieval::keyword;
use nutriwise_retrieval::ranking::deduplication::deduplicate;
use nutriwise_retrieval::ranking::DocumentReRanker;
use nutriwise_retrieval::IntentEngine;
use proptest::prelude::*;

// A narrow alphabet so generated contents actually collide.
fn doc_strategy() -> impl Strategy<Value = Document> {
    "[abc ]{0,12}".prop_map(|content| Document::new(content, DocumentMetadata::default()))
}

fn docs_strategy(max: usize) -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(doc_strategy(), 0..max)
}

fn sorted_contents(docs: &[Document]) -> Vec<String> {
    let mut contents: Vec<String> = docs.iter().map(|d| d.content.clone()).collect();
    contents.sort();
    contents
}

proptest! {
    #[test]
    fn dedup_is_idempotent(docs in docs_strategy(20)) {
        let once = deduplicate(docs);
        let twice = deduplicate(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedup_never_grows_and_keeps_unique_contents(docs in docs_strategy(20)) {
        let input_len = docs.len();
        let unique = deduplicate(docs);
        prop_assert!(unique.len() <= input_len);

        let mut contents = sorted_contents(&unique);
        contents.dedup();
        prop_assert_eq!(contents.len(), unique.len(), "duplicate content survived");
    }

    #[test]
    fn identical_documents_collapse_to_one(doc in doc_strategy(), copies in 1usize..5) {
        let docs = vec![doc; copies];
        prop_assert_eq!(deduplicate(docs).len(), 1);
    }

    #[test]
    fn rerank_is_a_permutation(docs in docs_strategy(15), query in "[abc ]{0,12}") {
        let reranker = DocumentReRanker::default();
        let result = reranker.rerank(docs.clone(), &query);
        prop_assert_eq!(result.len(), docs.len());
        prop_assert_eq!(sorted_contents(&result), sorted_contents(&docs));
    }

    #[test]
    fn rerank_never_touches_past_top_n(docs in docs_strategy(15), top_n in 0usize..6) {
        let config = ReRankingConfig {
            top_n_to_rerank: top_n,
            ..Default::default()
        };
        let reranker = DocumentReRanker::new(config);
        let result = reranker.rerank(docs.clone(), "abc");
        for i in top_n.min(docs.len())..docs.len() {
            prop_assert_eq!(&result[i], &docs[i], "suffix position {} moved", i);
        }
    }

    #[test]
    fn keyword_scores_match_input_length(docs in docs_strategy(10), query in ".{0,30}") {
        let scores = keyword::keyword_scores(&docs, &query);
        prop_assert_eq!(scores.len(), docs.len());
        prop_assert!(scores.iter().all(|s| s.is_finite() && *s >= 0.0));
    }

    #[test]
    fn keyword_scoring_is_deterministic(docs in docs_strategy(10), query in ".{0,30}") {
        let first = keyword::keyword_scores(&docs, &query);
        let second = keyword::keyword_scores(&docs, &query);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn classify_always_yields_a_non_zero_intent(query in ".{0,60}") {
        let engine = IntentEngine::new();
        let scores = engine.classify(&query);
        prop_assert!(!scores.is_all_zero(), "fallback must fire for {:?}", query);
        prop_assert!(Intent::ALL.iter().any(|&i| scores.get(i) > 0.0));
    }

    #[test]
    fn parsed_lines_are_never_empty(text in ".{0,120}") {
        for line in parse_line_list(&text) {
            prop_assert!(!line.trim().is_empty());
        }
    }
}
