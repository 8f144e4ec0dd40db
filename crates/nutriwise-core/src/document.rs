use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The atomic content+metadata unit flowing through every retrieval stage.
///
/// Content is never empty-by-construction checked — scorers tolerate any
/// string — but it is the identity key for deduplication, so two documents
/// with equal content are the same document as far as the pipeline cares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// The document text.
    pub content: String,
    /// Loosely-populated metadata; every field is optional.
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// Known metadata fields, read defensively by scorers, plus an escape-hatch
/// bag for anything the ingestion layer attaches that the core ignores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Source name or domain, e.g. "nih.gov".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Human-readable document name, e.g. "Vitamin D".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Document category: "vitamin", "mineral", "recipe", "diet_advice", ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    /// ISO-8601 document date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// ISO-8601 creation date; fallback when `date` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Unknown keys are preserved, never interpreted.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DocumentMetadata {
    /// Parsed document timestamp: `date` first, then `created_at`.
    /// Unparsable or missing values yield `None`.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date
            .as_deref()
            .and_then(parse_iso_datetime)
            .or_else(|| self.created_at.as_deref().and_then(parse_iso_datetime))
    }
}

/// Parse an ISO-8601 timestamp string.
///
/// Accepts RFC 3339, naive datetimes with `T` or space separators, and
/// bare dates (midnight UTC). Anything else is `None` — callers treat an
/// unparsable date as "no date", never as an error.
pub fn parse_iso_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
