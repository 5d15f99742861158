use crate::domain::error::DomainError;

/// Backend-agnostic reference to where a file's bytes live: a container
/// (bucket or namespace) plus a relative path inside it. Construction rejects
/// traversal segments and rooted paths; beyond that it knows nothing about any
/// provider's naming rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    container: String,
    path: String,
}

impl FileLocation {
    pub fn new(container: String, path: String) -> Result<Self, DomainError> {
        if container.trim().is_empty() {
            return Err(DomainError::InvalidLocation {
                reason: "container is empty".to_string(),
            });
        }
        if path.trim().is_empty() {
            return Err(DomainError::InvalidLocation {
                reason: "path is empty".to_string(),
            });
        }
        if path.contains("..") {
            return Err(DomainError::InvalidLocation {
                reason: "path contains a traversal segment".to_string(),
            });
        }
        if path.starts_with('/') {
            return Err(DomainError::InvalidLocation {
                reason: "path must be relative".to_string(),
            });
        }

        Ok(Self { container, path })
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn full_path(&self) -> String {
        format!("{}/{}", self.container, self.path)
    }
}
