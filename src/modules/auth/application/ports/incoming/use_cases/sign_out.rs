use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignOutError {
    /// The session ended for the caller but its token may still verify.
    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

#[async_trait]
pub trait SignOutUseCase: Send + Sync {
    async fn sign_out(&self, token: &str, session: &Session) -> Result<(), SignOutError>;
}
