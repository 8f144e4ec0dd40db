/// Retrieval subsystem errors.
///
/// Upstream failures (similarity search, completion) are caught at the
/// point of use and degrade to empty results; these variants exist so
/// collaborator implementations have a typed channel to report them.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("similarity search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("completion call failed: {reason}")]
    CompletionFailed { reason: String },

    #[error("scorer '{scorer}' failed: {reason}")]
    ScoringFailed { scorer: &'static str, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
