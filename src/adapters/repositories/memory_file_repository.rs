use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::{error::RepositoryError, repositories::file_repository::FileRepository},
    domain::models::file::{File, FileStatus},
};

/// In-process implementation of the repository contract, backed by a map.
/// Serves embedded use and as the test double for the service layer.
pub struct InMemoryFileRepository {
    files: RwLock<HashMap<Uuid, File>>,
}

impl InMemoryFileRepository {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn save(&self, file: &File) -> Result<(), RepositoryError> {
        self.files.write().unwrap().insert(file.id(), file.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<File>, RepositoryError> {
        Ok(self.files.read().unwrap().get(&id).cloned())
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<File>, RepositoryError> {
        let mut files: Vec<File> = self
            .files
            .read()
            .unwrap()
            .values()
            .filter(|file| file.belongs_to(owner_id))
            .cloned()
            .collect();

        files.sort_by(|a, b| b.metadata().uploaded_at().cmp(&a.metadata().uploaded_at()));
        Ok(files)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.files.write().unwrap().remove(&id);
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: FileStatus) -> Result<(), RepositoryError> {
        let mut files = self.files.write().unwrap();

        let file = files
            .get(&id)
            .ok_or(RepositoryError::NotFound { id })?;

        let updated = File::reconstitute(
            file.id(),
            file.metadata().clone(),
            file.location().clone(),
            status,
        );
        files.insert(id, updated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{location::FileLocation, metadata::FileMetadata};
    use chrono::{Duration, Utc};

    fn file_for(owner_id: &str, uploaded_offset_secs: i64) -> File {
        let metadata = FileMetadata::with_uploaded_at(
            "photo.png".to_string(),
            1024,
            "image/png".to_string(),
            owner_id.to_string(),
            Utc::now() + Duration::seconds(uploaded_offset_secs),
        )
        .unwrap();
        let location = FileLocation::new("uploads".to_string(), "photo.png".to_string()).unwrap();
        File::create(metadata, location)
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryFileRepository::new();
        let file = file_for("owner-1", 0);

        repo.save(&file).await.unwrap();

        let found = repo.find_by_id(file.id()).await.unwrap();
        assert_eq!(found, Some(file));
    }

    #[tokio::test]
    async fn test_find_by_id_miss_is_none() {
        let repo = InMemoryFileRepository::new();

        let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_record() {
        let repo = InMemoryFileRepository::new();
        let mut file = file_for("owner-1", 0);

        repo.save(&file).await.unwrap();
        file.mark_as_uploaded().unwrap();
        repo.save(&file).await.unwrap();

        let found = repo.find_by_id(file.id()).await.unwrap().unwrap();
        assert_eq!(found.status(), FileStatus::Uploaded);
    }

    #[tokio::test]
    async fn test_find_by_owner_id_newest_first() {
        let repo = InMemoryFileRepository::new();
        let oldest = file_for("owner-1", -120);
        let newest = file_for("owner-1", 0);
        let middle = file_for("owner-1", -60);
        let other = file_for("owner-2", 0);

        for file in [&oldest, &newest, &middle, &other] {
            repo.save(file).await.unwrap();
        }

        let files = repo.find_by_owner_id("owner-1").await.unwrap();
        let ids: Vec<Uuid> = files.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec![newest.id(), middle.id(), oldest.id()]);
    }

    #[tokio::test]
    async fn test_find_by_owner_id_empty_for_unknown_owner() {
        let repo = InMemoryFileRepository::new();
        repo.save(&file_for("owner-1", 0)).await.unwrap();

        let files = repo.find_by_owner_id("owner-9").await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryFileRepository::new();
        let file = file_for("owner-1", 0);
        repo.save(&file).await.unwrap();

        repo.delete(file.id()).await.unwrap();
        repo.delete(file.id()).await.unwrap();

        assert!(repo.find_by_id(file.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_status_writes_through() {
        let repo = InMemoryFileRepository::new();
        let file = file_for("owner-1", 0);
        repo.save(&file).await.unwrap();

        repo.update_status(file.id(), FileStatus::Uploaded)
            .await
            .unwrap();

        let found = repo.find_by_id(file.id()).await.unwrap().unwrap();
        assert_eq!(found.status(), FileStatus::Uploaded);
        assert_eq!(found.metadata(), file.metadata());
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_fails() {
        let repo = InMemoryFileRepository::new();
        let id = Uuid::new_v4();

        let result = repo.update_status(id, FileStatus::Deleted).await;
        assert_eq!(result.unwrap_err(), RepositoryError::NotFound { id });
    }
}
