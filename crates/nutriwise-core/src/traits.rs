//! Collaborator capability traits.
//!
//! The pipeline consumes two external capabilities (similarity search and
//! text completion) and exposes one (`IRetriever`). All are injected at
//! construction time; nothing is swapped on a live instance.

use crate::document::Document;
use crate::errors::RetrievalResult;

/// Embedding-backed similarity search: text in, ranked candidates out.
///
/// Implemented externally by a vector-index service. The pipeline treats
/// it as an opaque black box returning already-embedding-ranked documents.
/// Implementations must be safe to call concurrently.
pub trait ISimilaritySearch: Send + Sync {
    fn search(&self, query: &str) -> RetrievalResult<Vec<Document>>;
}

/// Text completion: prompt in, raw text out.
///
/// Used only for query reformulation. No provider-specific shape leaks
/// past this boundary.
pub trait ICompletion: Send + Sync {
    fn complete(&self, prompt: &str) -> RetrievalResult<String>;
}

/// Reorders an already-retrieved candidate set. Must return a permutation
/// of its input; infallible by contract (a reranker that cannot score
/// simply returns the input order).
pub trait IReranker: Send + Sync {
    fn rerank(&self, documents: Vec<Document>, query: &str) -> Vec<Document>;
}

/// The single public entry point consumed by the answer-synthesis layer.
///
/// Infallible by contract: every upstream failure degrades to fewer or
/// zero documents, never to an error surfacing from the pipeline.
pub trait IRetriever: Send + Sync {
    fn retrieve(&self, query: &str) -> Vec<Document>;
}
