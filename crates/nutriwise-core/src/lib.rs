//! # nutriwise-core
//!
//! Foundation crate for the Nutriwise retrieval system.
//! Defines the document model, collaborator traits, errors, config,
//! intent types, and the citation model.
//! The retrieval pipeline crate depends on this.

pub mod citation;
pub mod config;
pub mod constants;
pub mod document;
pub mod errors;
pub mod intent;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use citation::{Citation, CitationGenerator, CitationStyle};
pub use config::{ReRankingConfig, RetrieverConfig};
pub use document::{Document, DocumentMetadata};
pub use errors::{RetrievalError, RetrievalResult};
pub use intent::{Intent, IntentScores};
pub use traits::{ICompletion, IReranker, IRetriever, ISimilaritySearch};
