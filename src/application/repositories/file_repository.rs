use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::error::RepositoryError,
    domain::models::file::{File, FileStatus},
};

/// Persistence contract for file records. Implementations decide the storage
/// technology; callers may assume `find_by_owner_id` returns newest first.
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Upsert by identifier: creates the record or overwrites an existing one.
    async fn save(&self, file: &File) -> Result<(), RepositoryError>;

    /// A clean miss is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<File>, RepositoryError>;

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<File>, RepositoryError>;

    /// Hard delete of the persisted record. Deleting an unknown identifier is
    /// not a failure.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Targeted status write without a full read-modify-write round trip.
    /// Fails with `NotFound` when the identifier is absent.
    async fn update_status(&self, id: Uuid, status: FileStatus) -> Result<(), RepositoryError>;
}
