//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::entities::RecordId;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: RecordId,
    },
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: RecordId) -> Self {
        Self::NotFound { entity_type, id }
    }
}
