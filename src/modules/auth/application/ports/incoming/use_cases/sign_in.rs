use async_trait::async_trait;

use crate::auth::application::domain::entities::{Credentials, CredentialsError, Session};

#[derive(Debug, Clone)]
pub struct SignInResult {
    pub token: String,
    pub session: Session,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    InvalidInput(#[from] CredentialsError),

    /// Unknown email and wrong password are indistinguishable to the caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Sign-in failed: {0}")]
    Internal(String),
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> Result<SignInResult, SignInError>;
}
