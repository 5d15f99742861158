use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    models::{
        file::{File, FileStatus},
        location::FileLocation,
        metadata::FileMetadata,
    },
};

/// Flat record exchanged with the persistence collaborator. One row per file,
/// every scalar field of the entity and its value objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: Uuid,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    pub container: String,
    pub path: String,
    pub status: FileStatus,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl From<&File> for FileRecord {
    fn from(file: &File) -> Self {
        FileRecord {
            id: file.id(),
            file_name: file.metadata().file_name().to_string(),
            file_size: file.metadata().file_size(),
            mime_type: file.metadata().mime_type().to_string(),
            owner_id: file.metadata().owner_id().to_string(),
            container: file.location().container().to_string(),
            path: file.location().path().to_string(),
            status: file.status(),
            uploaded_at: file.metadata().uploaded_at(),
        }
    }
}

impl TryFrom<FileRecord> for File {
    type Error = DomainError;

    /// Rebuilds the entity from a persisted record. Metadata and location are
    /// re-validated; id and status are trusted as stored.
    fn try_from(record: FileRecord) -> Result<Self, Self::Error> {
        let metadata = FileMetadata::with_uploaded_at(
            record.file_name,
            record.file_size,
            record.mime_type,
            record.owner_id,
            record.uploaded_at,
        )?;
        let location = FileLocation::new(record.container, record.path)?;

        Ok(File::reconstitute(
            record.id,
            metadata,
            location,
            record.status,
        ))
    }
}
