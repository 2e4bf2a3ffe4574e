use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session expired")]
    Expired,

    #[error("Session was signed out")]
    Revoked,

    #[error("Revocation check failed: {0}")]
    RevocationCheckFailed(String),
}

/// Turns a presented session token into the session it represents.
#[async_trait]
pub trait ResolveSessionUseCase: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Session, ResolveSessionError>;
}
