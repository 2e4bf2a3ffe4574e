use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{RevocationError, SessionRevocation};

/// Revoked session tokens in Redis.
///
/// ```text
/// auth:revoked:{token_hash} -> "1"   (TTL = token's remaining lifetime)
/// ```
///
/// Entries disappear on their own once the token could no longer verify.
#[derive(Clone)]
pub struct RedisSessionRevocation {
    pool: Arc<Pool>,
}

impl RedisSessionRevocation {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:revoked:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, RevocationError> {
        self.pool
            .get()
            .await
            .map_err(|e| RevocationError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionRevocation for RedisSessionRevocation {
    async fn revoke(&self, token_hash: &str, ttl_secs: u64) -> Result<(), RevocationError> {
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(Self::token_key(token_hash), "1", ttl_secs)
            .await
            .map_err(|e| RevocationError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevocationError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(Self::token_key(token_hash))
            .await
            .map_err(|e| RevocationError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}
