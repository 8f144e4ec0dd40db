//! Rewrites one query into multiple alternative phrasings.
//!
//! The completion model is asked for four variants covering nutrient
//! specificity, health effects, food sources, and scientific framing;
//! its raw output is parsed line by line.

use tracing::debug;

use nutriwise_core::errors::RetrievalResult;
use nutriwise_core::traits::ICompletion;

/// Prompt template; `{question}` is replaced with the user query.
const REFORMULATION_PROMPT: &str = r#"You are an AI nutrition expert. Your task is to generate four different versions
of the given nutrition-related question to improve retrieval of relevant nutrition information.

For the question: "{question}"

Generate four different ways to ask this question, focusing on different aspects such as:
1. Specific nutrients or components involved
2. Health benefits or effects
3. Food sources or dietary considerations
4. Scientific or medical perspective

Make each query detailed and specific to improve search results. Provide these alternative
questions separated by newlines, without numbering or prefixes.
"#;

/// Parse completion output into one query per line.
///
/// Blank lines are dropped. A line starting with a single digit followed
/// by `". "`, `") "`, or `"- "` has that 3-character prefix stripped, so
/// `"1. A"`, `"1) A"`, and plain `"A"` all yield `"A"`. A line that is
/// only a numbering prefix is dropped rather than kept as an empty
/// query — an empty query would fan out into unscored candidates.
pub fn parse_line_list(text: &str) -> Vec<String> {
    text.trim()
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let bytes = line.as_bytes();
            let cleaned = if bytes.len() >= 3
                && bytes[0].is_ascii_digit()
                && matches!(&bytes[1..3], b". " | b") " | b"- ")
            {
                line[3..].trim()
            } else {
                line
            };
            if cleaned.is_empty() {
                return None;
            }
            Some(cleaned.to_string())
        })
        .collect()
}

/// Generates alternative phrasings of a query via a completion model.
///
/// Stateless across calls apart from configuration; safe to invoke
/// repeatedly and from multiple threads.
pub struct QueryReformulator<'a> {
    llm: &'a dyn ICompletion,
    include_original: bool,
}

impl<'a> QueryReformulator<'a> {
    pub fn new(llm: &'a dyn ICompletion) -> Self {
        Self {
            llm,
            include_original: true,
        }
    }

    /// Whether the original query is prepended when the model did not
    /// reproduce it verbatim. Default: true.
    pub fn with_include_original(mut self, include_original: bool) -> Self {
        self.include_original = include_original;
        self
    }

    /// Rewrite the original query into alternative queries.
    ///
    /// On success the list holds the original first (when configured and
    /// not already generated verbatim), then the alternatives in
    /// generation order. A failing completion call propagates; the
    /// enhanced retriever catches it and falls back to the original
    /// query alone.
    pub fn rewrite_query(&self, original_query: &str) -> RetrievalResult<Vec<String>> {
        let prompt = REFORMULATION_PROMPT.replace("{question}", original_query);
        let raw = self.llm.complete(&prompt)?;

        let alternatives = parse_line_list(&raw);
        debug!(
            count = alternatives.len(),
            query = original_query,
            "generated alternative queries"
        );

        let mut queries = alternatives;
        if self.include_original && !queries.iter().any(|q| q == original_query) {
            queries.insert(0, original_query.to_string());
        }
        Ok(queries)
    }
}
