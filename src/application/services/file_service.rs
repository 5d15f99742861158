use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::file_repository::FileRepository},
    domain::models::{file::File, location::FileLocation, metadata::FileMetadata},
};

/// Sequences entity lifecycle transitions with the persistence contract. This
/// is the layer that turns a repository miss into a not-found failure; the
/// repository itself reports absence, not errors, for clean misses.
pub struct FileService {
    repository: Arc<dyn FileRepository>,
}

impl FileService {
    pub fn new(repository: Arc<dyn FileRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new upload intent and persists it with status `PENDING`.
    pub async fn register_file(
        &self,
        file_name: String,
        file_size: u64,
        mime_type: String,
        owner_id: String,
        container: String,
        path: String,
    ) -> Result<File, ApplicationError> {
        let metadata = FileMetadata::new(file_name, file_size, mime_type, owner_id)?;
        let location = FileLocation::new(container, path)?;

        let file = File::create(metadata, location);
        self.repository.save(&file).await?;

        info!(
            "File registered: {} ({} bytes, {})",
            file.id(),
            file.metadata().file_size(),
            file.metadata().mime_type()
        );

        Ok(file)
    }

    /// Marks a pending file as uploaded once its bytes are confirmed in storage.
    pub async fn confirm_upload(&self, id: Uuid) -> Result<File, ApplicationError> {
        let mut file = self.find_existing(id).await?;

        file.mark_as_uploaded()?;
        self.repository.update_status(id, file.status()).await?;

        info!("Upload confirmed: {}", id);
        Ok(file)
    }

    /// Soft delete: the record stays in persistence, marked `DELETED`.
    pub async fn delete_file(&self, id: Uuid) -> Result<File, ApplicationError> {
        let mut file = self.find_existing(id).await?;

        file.mark_as_deleted()?;
        self.repository.update_status(id, file.status()).await?;

        info!("File marked as deleted: {}", id);
        Ok(file)
    }

    /// Hard delete: removes the persisted record entirely. Idempotent, and
    /// deliberately distinct from [`FileService::delete_file`].
    pub async fn purge_file(&self, id: Uuid) -> Result<(), ApplicationError> {
        self.repository.delete(id).await?;

        info!("File purged: {}", id);
        Ok(())
    }

    pub async fn get_file(&self, id: Uuid) -> Result<File, ApplicationError> {
        self.find_existing(id).await
    }

    pub async fn get_owner_files(&self, owner_id: &str) -> Result<Vec<File>, ApplicationError> {
        let files = self.repository.find_by_owner_id(owner_id).await?;
        Ok(files)
    }

    async fn find_existing(&self, id: Uuid) -> Result<File, ApplicationError> {
        match self.repository.find_by_id(id).await? {
            Some(file) => Ok(file),
            None => {
                warn!("File not found: {}", id);
                Err(ApplicationError::NotFound { id })
            }
        }
    }
}
