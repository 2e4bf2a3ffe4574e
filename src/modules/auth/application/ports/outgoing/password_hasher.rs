use async_trait::async_trait;

/// Failures of the credential hashing backend. A wrong password is not an
/// error: `verify_password` reports it as `Ok(false)`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("could not hash admin password")]
    HashFailed,

    #[error("stored password hash is malformed")]
    MalformedHash,

    #[error("hashing worker stopped before finishing")]
    WorkerStopped,
}

/// One-way hashing of admin passwords, used by sign-in and the startup
/// admin bootstrap.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
