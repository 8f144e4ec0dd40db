//! Source citations derived from retrieved documents.
//!
//! A citation is derived 1:1 from a document at answer time; formatting
//! is a pure function of the citation fields.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentMetadata};

/// Citation formatting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    Mla,
    Apa,
    Chicago,
}

impl Default for CitationStyle {
    fn default() -> Self {
        CitationStyle::Mla
    }
}

/// A formatted citation for one source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    /// Pre-formatted citation text in the generator's default style.
    pub text: String,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub date_accessed: Option<String>,
    /// Snippet of the cited document (truncated to ~100 chars).
    pub original_content: Option<String>,
    pub metadata: DocumentMetadata,
}

impl Citation {
    /// Render this citation in the requested style.
    pub fn to_display_format(&self, style: CitationStyle) -> String {
        match style {
            CitationStyle::Mla => self.format_mla(),
            CitationStyle::Apa => self.format_apa(),
            CitationStyle::Chicago => self.format_chicago(),
        }
    }

    fn source(&self) -> &str {
        self.source_name.as_deref().unwrap_or("Unknown Source")
    }

    fn format_mla(&self) -> String {
        // A pre-built MLA text already carries the access date.
        if !self.text.is_empty() && self.text.contains("Accessed") {
            return self.text.clone();
        }
        let url = self
            .source_url
            .as_deref()
            .map(|u| format!(", {u}"))
            .unwrap_or_default();
        let date = self
            .date_accessed
            .as_deref()
            .map(|d| format!(", Accessed {d}"))
            .unwrap_or_default();
        format!("\"{}\"{url}{date}.", self.source())
    }

    fn format_apa(&self) -> String {
        let url = self
            .source_url
            .as_deref()
            .map(|u| format!(". Retrieved from {u}"))
            .unwrap_or_default();
        let date = self
            .date_accessed
            .as_deref()
            .map(|d| format!(" on {d}"))
            .unwrap_or_default();
        format!("{}{url}{date}.", self.source())
    }

    fn format_chicago(&self) -> String {
        let url = self
            .source_url
            .as_deref()
            .map(|u| format!(", {u}"))
            .unwrap_or_default();
        let date = self
            .date_accessed
            .as_deref()
            .map(|d| format!(", accessed {}", d.to_lowercase()))
            .unwrap_or_default();
        format!("\"{}\"{url}{date}.", self.source())
    }
}

/// Builds citations from documents so answers can attribute their sources.
#[derive(Debug, Clone, Default)]
pub struct CitationGenerator {
    pub default_style: CitationStyle,
}

impl CitationGenerator {
    pub fn new(default_style: CitationStyle) -> Self {
        Self { default_style }
    }

    /// Generate a citation for one document.
    pub fn generate(&self, document: &Document) -> Citation {
        let metadata = document.metadata.clone();
        let source_name = metadata
            .source
            .clone()
            .or_else(|| metadata.name.clone())
            .or_else(|| Some("Unknown Source".to_string()));
        let source_url = metadata.url.clone();
        let date_accessed = Some(Utc::now().format("%d %B %Y").to_string());

        let original_content = if document.content.chars().count() > 100 {
            let snippet: String = document.content.chars().take(97).collect();
            Some(format!("{snippet}..."))
        } else {
            Some(document.content.clone())
        };

        let mut citation = Citation {
            text: String::new(),
            source_name,
            source_url,
            date_accessed,
            original_content,
            metadata,
        };
        citation.text = citation.to_display_format(self.default_style);
        citation
    }

    /// Generate citations for a batch of documents, in order.
    pub fn generate_all(&self, documents: &[Document]) -> Vec<Citation> {
        documents.iter().map(|d| self.generate(d)).collect()
    }
}
