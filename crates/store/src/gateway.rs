use std::sync::Arc;

use thiserror::Error;

use facturo_core::DocumentId;

use crate::record::{DocumentRow, NewDocument};

/// Gateway operation error.
///
/// Infrastructure failures only (storage, transport); domain errors never
/// originate here. Network submission lives behind the same seam, so callers
/// handle one error type whether the backend is memory or a remote table.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("insert failed: {0}")]
    Insert(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("document not found: {0}")]
    NotFound(DocumentId),
}

/// Invoice document gateway.
///
/// One append surface (`insert`) and two read surfaces (`fetch`, `list`).
/// Implementations assign `DocumentId` and `created_at` during insert; rows
/// are immutable once accepted. `list` returns rows in insertion order.
pub trait DocumentStore: Send + Sync {
    /// Persist a submission record, returning the stored row with its
    /// assigned identity and timestamp.
    fn insert(&self, document: NewDocument) -> Result<DocumentRow, StoreError>;

    /// Load one stored document by id.
    fn fetch(&self, id: DocumentId) -> Result<DocumentRow, StoreError>;

    /// All stored documents, oldest first.
    fn list(&self) -> Result<Vec<DocumentRow>, StoreError>;
}

impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    fn insert(&self, document: NewDocument) -> Result<DocumentRow, StoreError> {
        (**self).insert(document)
    }

    fn fetch(&self, id: DocumentId) -> Result<DocumentRow, StoreError> {
        (**self).fetch(id)
    }

    fn list(&self) -> Result<Vec<DocumentRow>, StoreError> {
        (**self).list()
    }
}
