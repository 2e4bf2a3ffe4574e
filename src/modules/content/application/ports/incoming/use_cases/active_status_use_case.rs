use async_trait::async_trait;

use crate::content::application::domain::entities::ActiveStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActiveStatusError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ActiveStatusUseCase: Send + Sync {
    /// `None` when the singleton document has never been written.
    async fn get(&self) -> Result<Option<ActiveStatus>, ActiveStatusError>;

    async fn set(&self, status: bool) -> Result<ActiveStatus, ActiveStatusError>;

    /// Flips the stored flag; an absent document counts as inactive.
    async fn toggle(&self) -> Result<ActiveStatus, ActiveStatusError>;
}
