use thiserror::Error;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Failures crossing the persistence boundary. Kept apart from [`DomainError`]
/// so a storage outage is never mistaken for a business-rule violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("File not found: {id}")]
    NotFound { id: Uuid },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    #[error("File not found: {id}")]
    NotFound { id: Uuid },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
