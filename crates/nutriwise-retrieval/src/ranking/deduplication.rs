//! Content-keyed deduplication for fan-out retrieval results.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use nutriwise_core::document::Document;

/// Collapse documents with identical content to a single entry.
///
/// A duplicate keeps the position of its first occurrence but the
/// metadata of its last — metadata differences on equal content are not
/// reconciled, simply overwritten. Idempotent.
pub fn deduplicate(documents: Vec<Document>) -> Vec<Document> {
    let mut unique: Vec<Document> = Vec::with_capacity(documents.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for doc in documents {
        match seen.entry(doc.content.clone()) {
            Entry::Occupied(slot) => unique[*slot.get()] = doc,
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(doc);
            }
        }
    }

    unique
}
