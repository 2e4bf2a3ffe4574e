use async_trait::async_trait;
use tracing::info;

use crate::content::application::{
    domain::entities::ActiveStatus,
    ports::{
        incoming::use_cases::{ActiveStatusError, ActiveStatusUseCase},
        outgoing::DocumentStore,
    },
};

/// Availability flag stored as a singleton document at a fixed id.
#[derive(Debug, Clone)]
pub struct ActiveStatusService<S>
where
    S: DocumentStore,
{
    store: S,
    document_id: String,
}

impl<S> ActiveStatusService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, document_id: impl Into<String>) -> Self {
        Self {
            store,
            document_id: document_id.into(),
        }
    }

    async fn write(&self, status: bool) -> Result<ActiveStatus, ActiveStatusError> {
        let value = ActiveStatus { status };
        let data = serde_json::to_value(value)
            .map_err(|e| ActiveStatusError::StoreError(e.to_string()))?;

        self.store
            .set(ActiveStatus::COLLECTION, &self.document_id, data)
            .await
            .map_err(|e| ActiveStatusError::StoreError(e.to_string()))?;

        info!(status, "Active status updated");
        Ok(value)
    }
}

#[async_trait]
impl<S> ActiveStatusUseCase for ActiveStatusService<S>
where
    S: DocumentStore,
{
    async fn get(&self) -> Result<Option<ActiveStatus>, ActiveStatusError> {
        let document = self
            .store
            .get(ActiveStatus::COLLECTION, &self.document_id)
            .await
            .map_err(|e| ActiveStatusError::StoreError(e.to_string()))?;

        document
            .map(|d| serde_json::from_value::<ActiveStatus>(d.data))
            .transpose()
            .map_err(|e| ActiveStatusError::StoreError(e.to_string()))
    }

    async fn set(&self, status: bool) -> Result<ActiveStatus, ActiveStatusError> {
        self.write(status).await
    }

    async fn toggle(&self) -> Result<ActiveStatus, ActiveStatusError> {
        let current = self.get().await?.unwrap_or_default();
        self.write(!current.status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tests::support::in_memory_store::{FailingDocumentStore, InMemoryDocumentStore};

    const DOC_ID: &str = "current";

    #[tokio::test]
    async fn get_returns_none_before_first_write() {
        let service = ActiveStatusService::new(InMemoryDocumentStore::new(), DOC_ID);

        assert_eq!(service.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let service = ActiveStatusService::new(InMemoryDocumentStore::new(), DOC_ID);

        service.set(true).await.unwrap();

        assert_eq!(
            service.get().await.unwrap(),
            Some(ActiveStatus { status: true })
        );
    }

    #[tokio::test]
    async fn toggle_from_absent_activates() {
        let service = ActiveStatusService::new(InMemoryDocumentStore::new(), DOC_ID);

        let toggled = service.toggle().await.unwrap();

        assert!(toggled.status);
    }

    #[tokio::test]
    async fn toggle_flips_stored_value() {
        let store = InMemoryDocumentStore::new();
        store.insert_raw("active_status", DOC_ID, json!({ "status": true }));
        let service = ActiveStatusService::new(store.clone(), DOC_ID);

        let toggled = service.toggle().await.unwrap();

        assert!(!toggled.status);
        assert_eq!(
            store.get_raw("active_status", DOC_ID),
            Some(json!({ "status": false }))
        );
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let service = ActiveStatusService::new(FailingDocumentStore::new("timeout"), DOC_ID);

        assert!(matches!(
            service.toggle().await,
            Err(ActiveStatusError::StoreError(_))
        ));
    }
}
