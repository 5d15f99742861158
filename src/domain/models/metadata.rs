use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;

/// Validated description of an uploaded file. Instances can only be obtained
/// through [`FileMetadata::new`] or [`FileMetadata::with_uploaded_at`], so an
/// invalid combination of name, size and mime type never exists as a value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    file_name: String,
    file_size: u64,
    mime_type: String,
    owner_id: String,
    uploaded_at: DateTime<Utc>,
}

impl FileMetadata {
    pub const MAX_FILE_SIZE: u64 = 10_485_760;
    pub const ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "application/pdf"];

    const MAX_FILE_NAME_LENGTH: usize = 255;

    /// Validates and builds metadata, stamping `uploaded_at` with the current time.
    pub fn new(
        file_name: String,
        file_size: u64,
        mime_type: String,
        owner_id: String,
    ) -> Result<Self, DomainError> {
        Self::with_uploaded_at(file_name, file_size, mime_type, owner_id, Utc::now())
    }

    /// Validates and builds metadata with an explicit upload timestamp. Used
    /// when rebuilding metadata from a persisted record.
    pub fn with_uploaded_at(
        file_name: String,
        file_size: u64,
        mime_type: String,
        owner_id: String,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validate_size(file_size)?;
        Self::validate_mime_type(&mime_type)?;
        Self::validate_file_name(&file_name)?;

        Ok(Self {
            file_name,
            file_size,
            mime_type,
            owner_id,
            uploaded_at,
        })
    }

    fn validate_size(file_size: u64) -> Result<(), DomainError> {
        if file_size == 0 || file_size > Self::MAX_FILE_SIZE {
            return Err(DomainError::FileSizeExceeded {
                size: file_size,
                max_size: Self::MAX_FILE_SIZE,
            });
        }
        Ok(())
    }

    fn validate_mime_type(mime_type: &str) -> Result<(), DomainError> {
        if !Self::ALLOWED_MIME_TYPES.contains(&mime_type) {
            return Err(DomainError::InvalidFileType {
                mime_type: mime_type.to_string(),
                allowed: Self::ALLOWED_MIME_TYPES,
            });
        }
        Ok(())
    }

    fn validate_file_name(file_name: &str) -> Result<(), DomainError> {
        if file_name.trim().is_empty() {
            return Err(DomainError::InvalidFileName {
                reason: "file name is empty".to_string(),
            });
        }
        if file_name.chars().count() > Self::MAX_FILE_NAME_LENGTH {
            return Err(DomainError::InvalidFileName {
                reason: format!(
                    "file name exceeds {} characters",
                    Self::MAX_FILE_NAME_LENGTH
                ),
            });
        }
        if file_name.contains("..") || file_name.contains('/') || file_name.contains('\0') {
            return Err(DomainError::InvalidFileName {
                reason: "file name contains a forbidden character".to_string(),
            });
        }
        Ok(())
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == "application/pdf"
    }

    pub fn size_in_mb(&self) -> f64 {
        self.file_size as f64 / 1_048_576.0
    }

    /// Extension after the last `.`, lower-cased. Empty when the name has none.
    pub fn extension(&self) -> String {
        match self.file_name.rfind('.') {
            Some(index) => self.file_name[index + 1..].to_lowercase(),
            None => String::new(),
        }
    }
}
