//! In-memory document store
//!
//! A concurrent map plus an atomic id generator. Ids are strictly
//! increasing and issued exactly once; the generator is decoupled from map
//! insertion so concurrent creates never collide or reuse an id.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use super::cursor::Cursor;
use super::types::{Document, DocumentId, HealthSummary};

/// Ids 1 and 2 are reserved for the seed documents.
const FIRST_ASSIGNABLE_ID: DocumentId = 3;

/// Errors a store operation can report to its caller.
///
/// Both variants are client errors; the store itself has no fatal failure
/// modes (no disk, no network).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no document supplied")]
    InvalidInput,

    #[error("document {0} not found")]
    NotFound(DocumentId),
}

/// Thread-safe document store
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    documents: RwLock<HashMap<DocumentId, Document>>,
    next_id: AtomicU64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create an empty store. Assignable ids start after the seed range.
    pub fn new() -> Self {
        Self::with_documents(HashMap::new())
    }

    /// Create a store pre-populated with the two seed documents (ids 1, 2).
    pub fn seeded() -> Self {
        let mut documents = HashMap::new();
        documents.insert(1, Document::new("Harry Smith", "Meeting report"));
        documents.insert(2, Document::new("Jack Williams", "Board meeting presentation"));
        Self::with_documents(documents)
    }

    fn with_documents(documents: HashMap<DocumentId, Document>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                documents: RwLock::new(documents),
                next_id: AtomicU64::new(FIRST_ASSIGNABLE_ID),
            }),
        }
    }

    /// Store a document under a freshly reserved id.
    ///
    /// The id is reserved atomically before insertion, so concurrent callers
    /// always receive distinct ids, and the id becomes visible to readers
    /// only together with its document. `None` reports `InvalidInput` and
    /// leaves the store untouched.
    pub async fn create(&self, document: Option<Document>) -> Result<DocumentId, StoreError> {
        let document = document.ok_or(StoreError::InvalidInput)?;

        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        {
            let mut documents = self.inner.documents.write().await;
            documents.insert(id, document);
        }

        tracing::debug!(id, "stored document");
        Ok(id)
    }

    /// Fetch a document by id.
    ///
    /// Reflects every `create` that has already returned to its caller.
    pub async fn get(&self, id: DocumentId) -> Result<Document, StoreError> {
        let documents = self.inner.documents.read().await;
        documents.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// All stored documents, in no guaranteed order.
    pub async fn list_all(&self) -> Vec<Document> {
        let documents = self.inner.documents.read().await;
        documents.values().cloned().collect()
    }

    /// Documents with ids beyond `cursor`, plus the advanced cursor.
    ///
    /// The returned cursor is the maximum id among the selected documents,
    /// or `cursor` unchanged when nothing qualifies. It never regresses.
    /// The whole computation runs against one consistent snapshot of the map.
    pub async fn new_since(&self, cursor: Cursor) -> (Vec<Document>, Cursor) {
        let documents = self.inner.documents.read().await;

        let mut selected = Vec::new();
        let mut max_seen = cursor;
        for (&id, document) in documents.iter() {
            if !cursor.admits(id) {
                continue;
            }
            max_seen = max_seen.max(Cursor::from_id(id));
            selected.push(document.clone());
        }

        (selected, max_seen)
    }

    /// Entry count and distinct-author count, computed at call time.
    ///
    /// Authors are compared case-sensitively, exact match.
    pub async fn health_summary(&self) -> HealthSummary {
        let documents = self.inner.documents.read().await;
        let distinct_author_count = documents
            .values()
            .map(|d| d.author.as_str())
            .collect::<HashSet<_>>()
            .len();

        HealthSummary {
            entry_count: documents.len(),
            distinct_author_count,
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.inner.documents.read().await.len()
    }

    /// Whether the store holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.inner.documents.read().await.is_empty()
    }
}
