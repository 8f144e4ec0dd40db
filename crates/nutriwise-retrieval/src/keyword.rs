//! Keyword relevance scoring for candidate documents.
//!
//! Scores are unbounded additive sums, not clamped to [0, 1] — the hybrid
//! pipeline feeds them into a multiplicative boost, so callers must not
//! assume a normalized range.

use std::collections::HashSet;

use nutriwise_core::document::Document;

/// Query terms used for keyword scoring: lowercased words longer than
/// two characters, in query order.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Score every document by keyword match against the query.
///
/// Per matched term: `min(0.2, 0.05 × occurrences)`, plus `0.1` when the
/// term also appears as an exact whitespace-delimited token. Each adjacent
/// query-term bigram found verbatim adds `0.15`. A query term inside the
/// metadata `name` field adds `0.3`.
pub fn keyword_scores(documents: &[Document], query: &str) -> Vec<f64> {
    let terms = query_terms(query);
    documents
        .iter()
        .map(|doc| score_document(doc, &terms))
        .collect()
}

fn score_document(document: &Document, terms: &[String]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let content = document.content.to_lowercase();
    let tokens: HashSet<&str> = content.split_whitespace().collect();
    let mut score = 0.0;

    for term in terms {
        let occurrences = content.matches(term.as_str()).count();
        if occurrences > 0 {
            score += (0.05 * occurrences as f64).min(0.2);
            if tokens.contains(term.as_str()) {
                score += 0.1;
            }
        }
    }

    for pair in terms.windows(2) {
        let bigram = format!("{} {}", pair[0], pair[1]);
        if content.contains(&bigram) {
            score += 0.15;
        }
    }

    if let Some(name) = document.metadata.name.as_deref() {
        let name = name.to_lowercase();
        if terms.iter().any(|t| name.contains(t.as_str())) {
            score += 0.3;
        }
    }

    score
}
