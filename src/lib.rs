pub mod adapters;
pub mod application;
pub mod domain;

pub use adapters::repositories::InMemoryFileRepository;
pub use application::{
    dto::file_dto::FileRecord,
    error::{ApplicationError, RepositoryError},
    repositories::file_repository::FileRepository,
    services::FileService,
};
pub use domain::{
    error::DomainError,
    models::{
        file::{File, FileStatus},
        location::FileLocation,
        metadata::FileMetadata,
    },
};
