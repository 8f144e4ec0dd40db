/// Nutriwise system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of documents returned by a retriever.
pub const DEFAULT_K: usize = 4;

/// Default cap on reformulated queries in the fan-out path.
pub const DEFAULT_MAX_QUERIES: usize = 4;

/// Default number of leading candidates the re-ranker rescores.
pub const DEFAULT_TOP_N_TO_RERANK: usize = 20;

/// Default maximum document age (days) for freshness scoring.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 365;
