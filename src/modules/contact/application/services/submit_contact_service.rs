use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::contact::application::{
    domain::contact_message::ContactMessage,
    ports::{
        incoming::use_cases::{SubmitContactError, SubmitContactUseCase},
        outgoing::ContactMailer,
    },
};

/// One delivery attempt per submission. Nothing is queued or retried.
#[derive(Clone)]
pub struct SubmitContactService {
    mailer: Arc<dyn ContactMailer>,
}

impl SubmitContactService {
    pub fn new(mailer: Arc<dyn ContactMailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmitContactError> {
        match self.mailer.send(&message).await {
            Ok(()) => {
                info!(sender = %message.email(), "Contact message delivered");
                Ok(())
            }
            Err(e) => {
                error!(sender = %message.email(), error = %e, "Contact message delivery failed");
                Err(SubmitContactError::DeliveryFailed(e.to_string()))
            }
        }
    }
}
