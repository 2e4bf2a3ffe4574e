use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RevocationError {
    #[error("Revocation store error: {0}")]
    StoreError(String),
}

/// Remembers signed-out session tokens until they would have expired anyway.
///
/// Tokens are identified by their SHA-256 hash, never stored raw.
#[async_trait]
pub trait SessionRevocation: Send + Sync {
    async fn revoke(&self, token_hash: &str, ttl_secs: u64) -> Result<(), RevocationError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevocationError>;
}
