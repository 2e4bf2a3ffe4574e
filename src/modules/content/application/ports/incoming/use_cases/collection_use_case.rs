use async_trait::async_trait;

use crate::content::application::domain::entities::{
    CollectionEntry, EntryValidationError, Stored,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionError {
    #[error(transparent)]
    Validation(#[from] EntryValidationError),

    #[error("Entry not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

/// List/create/update/delete over the collection of one entry type.
#[async_trait]
pub trait CollectionUseCase<E: CollectionEntry>: Send + Sync {
    async fn list(&self) -> Result<Vec<Stored<E>>, CollectionError>;

    async fn create(&self, entry: E) -> Result<Stored<E>, CollectionError>;

    async fn update(&self, id: &str, entry: E) -> Result<Stored<E>, CollectionError>;

    async fn delete(&self, id: &str) -> Result<(), CollectionError>;
}
