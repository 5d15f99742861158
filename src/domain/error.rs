use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("File size {size} is outside the allowed range (max {max_size} bytes)")]
    FileSizeExceeded { size: u64, max_size: u64 },

    #[error("Mime type '{mime_type}' is not allowed (allowed: {allowed:?})")]
    InvalidFileType {
        mime_type: String,
        allowed: &'static [&'static str],
    },

    #[error("Invalid file name: {reason}")]
    InvalidFileName { reason: String },

    #[error("Invalid file location: {reason}")]
    InvalidLocation { reason: String },

    #[error("File already uploaded: {id}")]
    AlreadyUploaded { id: Uuid },

    #[error("File already deleted: {id}")]
    AlreadyDeleted { id: Uuid },
}
