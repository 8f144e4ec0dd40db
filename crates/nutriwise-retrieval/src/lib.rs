//! # nutriwise-retrieval
//!
//! The hybrid retrieval and re-ranking pipeline:
//! query → (optional reformulation fan-out) → base similarity search →
//! intent-aware keyword/metadata scoring → (optional multi-factor
//! re-ranking) → top-k documents.
//!
//! The base similarity search and the completion model are injected
//! collaborators ([`nutriwise_core::ISimilaritySearch`],
//! [`nutriwise_core::ICompletion`]); every upstream failure degrades to
//! fewer or zero documents instead of propagating.

pub mod engine;
pub mod enhanced;
pub mod expansion;
pub mod intent;
pub mod keyword;
pub mod ranking;

pub use engine::HybridRetriever;
pub use enhanced::EnhancedRetriever;
pub use expansion::QueryReformulator;
pub use intent::IntentEngine;
pub use ranking::DocumentReRanker;
