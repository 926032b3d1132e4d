//! Record Repository Port
//!
//! Abstract interface for an ordered collection of one record kind.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Record, RecordId};

/// Repository interface for records of kind `R`
///
/// Lookups scan the collection from the start and the first record with a
/// matching id wins.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// All records in insertion order
    async fn find_all(&self) -> Vec<R>;

    /// Find a record by ID
    async fn find_by_id(&self, id: RecordId) -> Result<R, DomainError>;

    /// Append a new record, assigning its id as the current count plus one
    async fn insert(&self, draft: R::Draft) -> R;

    /// Merge the set fields of `patch` into the record with this id
    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, DomainError>;

    /// Remove the record with this id and return it
    async fn delete(&self, id: RecordId) -> Result<R, DomainError>;
}
