//! Core document types

use serde::{Deserialize, Serialize};

/// Identifier assigned to a document by the store.
///
/// Strictly increasing, unique, never reused. Only the store hands these out.
pub type DocumentId = u64;

/// A stored document. Immutable once created; identity lives in the store,
/// not in the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub author: String,
    pub title: String,
}

impl Document {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

/// Snapshot of store health, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub entry_count: usize,
    pub distinct_author_count: usize,
}
