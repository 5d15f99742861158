use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::location::FileLocation;
use crate::domain::models::metadata::FileMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatus {
    Pending,
    Uploaded,
    Deleted,
}

impl Display for FileStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FileStatus::Pending => write!(f, "PENDING"),
            FileStatus::Uploaded => write!(f, "UPLOADED"),
            FileStatus::Deleted => write!(f, "DELETED"),
        }
    }
}

/// An uploaded file record. Identity lives in `id`; metadata and location are
/// fixed at construction and only `status` changes, exclusively through the
/// transition methods. `DELETED` is terminal.
#[derive(Debug, Clone)]
pub struct File {
    id: Uuid,
    metadata: FileMetadata,
    location: FileLocation,
    status: FileStatus,
}

impl File {
    /// Registers a new upload intent: fresh identifier, status `PENDING`.
    pub fn create(metadata: FileMetadata, location: FileLocation) -> Self {
        Self {
            id: Uuid::new_v4(),
            metadata,
            location,
            status: FileStatus::Pending,
        }
    }

    /// Rebuilds an entity from persisted state. The identifier and status are
    /// trusted as stored; no transition rules are re-applied.
    pub fn reconstitute(
        id: Uuid,
        metadata: FileMetadata,
        location: FileLocation,
        status: FileStatus,
    ) -> Self {
        Self {
            id,
            metadata,
            location,
            status,
        }
    }

    /// Records that the file's bytes are confirmed present in storage.
    pub fn mark_as_uploaded(&mut self) -> Result<(), DomainError> {
        match self.status {
            FileStatus::Pending => {
                self.status = FileStatus::Uploaded;
                Ok(())
            }
            FileStatus::Uploaded => Err(DomainError::AlreadyUploaded { id: self.id }),
            FileStatus::Deleted => Err(DomainError::AlreadyDeleted { id: self.id }),
        }
    }

    /// Soft delete. Physical removal of the bytes is the storage collaborator's
    /// concern, not this entity's.
    pub fn mark_as_deleted(&mut self) -> Result<(), DomainError> {
        match self.status {
            FileStatus::Deleted => Err(DomainError::AlreadyDeleted { id: self.id }),
            FileStatus::Pending | FileStatus::Uploaded => {
                self.status = FileStatus::Deleted;
                Ok(())
            }
        }
    }

    pub fn can_be_downloaded(&self) -> bool {
        self.status == FileStatus::Uploaded
    }

    pub fn belongs_to(&self, owner_id: &str) -> bool {
        self.metadata.owner_id() == owner_id
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    pub fn location(&self) -> &FileLocation {
        &self.location
    }

    pub fn status(&self) -> FileStatus {
        self.status
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for File {}
