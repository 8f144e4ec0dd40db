//! Shared fixtures: sample documents and mock collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;

use nutriwise_core::document::{Document, DocumentMetadata};
use nutriwise_core::errors::{RetrievalError, RetrievalResult};
use nutriwise_core::traits::{ICompletion, ISimilaritySearch};

pub fn doc(content: &str, source: &str, doc_type: &str, name: &str) -> Document {
    Document::new(
        content,
        DocumentMetadata {
            source: Some(source.to_string()),
            doc_type: Some(doc_type.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        },
    )
}

/// The five-document candidate pool used by the hybrid pipeline tests.
pub fn nutrition_corpus() -> Vec<Document> {
    vec![
        doc(
            "Vitamin D is essential for calcium absorption and bone health.",
            "nih.gov",
            "vitamin",
            "Vitamin D",
        ),
        doc(
            "High protein foods include chicken, fish, and legumes.",
            "nutrition.org",
            "food",
            "Protein Sources",
        ),
        doc(
            "Iron deficiency is common and can lead to anemia.",
            "mayoclinic.org",
            "mineral",
            "Iron",
        ),
        doc(
            "A balanced diet contains proteins, carbohydrates, and fats.",
            "health.org",
            "general",
            "Balanced Diet",
        ),
        doc(
            "Vitamin C supports immune function and is found in citrus fruits.",
            "cdc.gov",
            "vitamin",
            "Vitamin C",
        ),
    ]
}

/// The four-document set used by the scorer and re-ranker tests.
pub fn scorer_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "Vitamin C is an essential nutrient found in citrus fruits like oranges and lemons.",
            DocumentMetadata {
                source: Some("nutrition_sample".to_string()),
                doc_type: Some("vitamin".to_string()),
                date: Some(Utc::now().to_rfc3339()),
                ..Default::default()
            },
        ),
        Document::new(
            "Protein is important for muscle growth and can be found in meats, dairy, and legumes.",
            DocumentMetadata {
                source: Some("nutrition_sample".to_string()),
                doc_type: Some("macronutrient".to_string()),
                ..Default::default()
            },
        ),
        Document::new(
            "Iron deficiency can lead to anemia and fatigue. Good sources include red meat and spinach.",
            DocumentMetadata {
                source: Some("nih.gov".to_string()),
                doc_type: Some("mineral".to_string()),
                date: Some("2021-01-01".to_string()),
                ..Default::default()
            },
        ),
        Document::new(
            "A balanced diet should include a variety of fruits, vegetables, grains, and proteins.",
            DocumentMetadata {
                source: Some("general".to_string()),
                doc_type: Some("diet_advice".to_string()),
                ..Default::default()
            },
        ),
    ]
}

/// Base search returning a fixed candidate list, counting calls.
pub struct StaticSearch {
    documents: Vec<Document>,
    calls: AtomicUsize,
}

impl StaticSearch {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ISimilaritySearch for StaticSearch {
    fn search(&self, _query: &str) -> RetrievalResult<Vec<Document>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.documents.clone())
    }
}

/// Base search that always fails.
pub struct FailingSearch;

impl ISimilaritySearch for FailingSearch {
    fn search(&self, _query: &str) -> RetrievalResult<Vec<Document>> {
        Err(RetrievalError::SearchFailed {
            reason: "vector index unavailable".to_string(),
        })
    }
}

/// Completion model returning a canned response.
pub struct StaticCompletion {
    pub response: String,
}

impl StaticCompletion {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl ICompletion for StaticCompletion {
    fn complete(&self, _prompt: &str) -> RetrievalResult<String> {
        Ok(self.response.clone())
    }
}

/// Completion model that always fails.
pub struct FailingCompletion;

impl ICompletion for FailingCompletion {
    fn complete(&self, _prompt: &str) -> RetrievalResult<String> {
        Err(RetrievalError::CompletionFailed {
            reason: "model endpoint timed out".to_string(),
        })
    }
}
