use async_trait::async_trait;

use crate::contact::application::domain::contact_message::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MailerError {
    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Mail provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Could not build message: {0}")]
    InvalidMessage(String),
}

/// Delivers a contact submission to the site owner.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailerError>;
}
