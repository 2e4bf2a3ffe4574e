use async_trait::async_trait;

use crate::contact::application::domain::contact_message::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmitContactError>;
}
