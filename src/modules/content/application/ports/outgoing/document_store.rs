use async_trait::async_trait;
use serde_json::Value;

/// A schemaless document addressed by collection name and id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("Document not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, oldest first.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError>;

    async fn get(&self, collection: &str, id: &str)
        -> Result<Option<Document>, DocumentStoreError>;

    /// Stores `data` under a freshly generated id.
    async fn add(&self, collection: &str, data: Value) -> Result<Document, DocumentStoreError>;

    /// Creates or overwrites the document at `id`.
    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DocumentStoreError>;

    /// Overwrites an existing document. Fails with `NotFound` when absent.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DocumentStoreError>;

    /// Removes the document if present. Deleting an absent id succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;
}
