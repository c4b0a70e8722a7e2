use std::sync::RwLock;

use chrono::Utc;

use facturo_core::DocumentId;

use crate::gateway::{DocumentStore, StoreError};
use crate::record::{DocumentRow, NewDocument};

/// In-memory document store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    rows: RwLock<Vec<DocumentRow>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert(&self, document: NewDocument) -> Result<DocumentRow, StoreError> {
        let row = DocumentRow {
            id: DocumentId::new(),
            created_at: Utc::now(),
            document,
        };

        let mut rows = self
            .rows
            .write()
            .map_err(|_| StoreError::Insert("lock poisoned".to_string()))?;
        rows.push(row.clone());
        Ok(row)
    }

    fn fetch(&self, id: DocumentId) -> Result<DocumentRow, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        rows.iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<DocumentRow>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StoreError::Query("lock poisoned".to_string()))?;
        Ok(rows.clone())
    }
}
