//! Record Application Service (Use Case)
//!
//! Orchestrates domain operations for one record kind.

use std::marker::PhantomData;
use std::sync::Arc;

use roster::{DomainError, Record, RecordId, RecordRepository};

/// Application service for operations on records of kind `T`
pub struct RecordService<T: Record, R: RecordRepository<T>> {
    repo: Arc<R>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record, R: RecordRepository<T>> RecordService<T, R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// Get all records
    pub async fn list_all(&self) -> Vec<T> {
        self.repo.find_all().await
    }

    /// Get a record by ID
    pub async fn get_by_id(&self, id: RecordId) -> Result<T, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new record
    pub async fn create(&self, draft: T::Draft) -> T {
        let created = self.repo.insert(draft).await;
        tracing::info!(kind = T::KIND, id = created.id(), "Created record");
        created
    }

    /// Apply a partial update
    pub async fn update(&self, id: RecordId, patch: T::Patch) -> Result<T, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        tracing::info!(kind = T::KIND, id, "Updated record");
        Ok(updated)
    }

    /// Delete a record, returning what was removed
    pub async fn delete(&self, id: RecordId) -> Result<T, DomainError> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(kind = T::KIND, id, "Deleted record");
        Ok(removed)
    }
}
