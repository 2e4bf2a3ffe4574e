use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::token_hasher::hash_token;
use crate::auth::application::{
    domain::entities::Session,
    ports::{
        incoming::use_cases::{ResolveSessionError, ResolveSessionUseCase},
        outgoing::{SessionRevocation, TokenError, TokenProvider},
    },
};

#[derive(Clone)]
pub struct ResolveSessionService {
    tokens: Arc<dyn TokenProvider>,
    revocation: Arc<dyn SessionRevocation>,
}

impl ResolveSessionService {
    pub fn new(tokens: Arc<dyn TokenProvider>, revocation: Arc<dyn SessionRevocation>) -> Self {
        Self { tokens, revocation }
    }
}

#[async_trait]
impl ResolveSessionUseCase for ResolveSessionService {
    async fn resolve(&self, token: &str) -> Result<Session, ResolveSessionError> {
        let claims = self
            .tokens
            .verify_session_token(token)
            .map_err(|e| match e {
                TokenError::TokenExpired => ResolveSessionError::Expired,
                _ => ResolveSessionError::InvalidToken,
            })?;

        let revoked = self
            .revocation
            .is_revoked(&hash_token(token))
            .await
            .map_err(|e| ResolveSessionError::RevocationCheckFailed(e.to_string()))?;

        if revoked {
            debug!(admin_id = %claims.sub, "Rejected signed-out session token");
            return Err(ResolveSessionError::Revoked);
        }

        Ok(Session {
            admin_id: claims.sub,
            email: claims.email,
            expires_at: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::auth::application::{
        ports::outgoing::{RevocationError, SessionClaims},
        services::mocks::{MockSessionRevocationMock, MockTokenProviderMock},
    };

    fn claims(admin_id: Uuid) -> SessionClaims {
        SessionClaims {
            sub: admin_id,
            email: "owner@example.com".to_string(),
            exp: 4_102_444_800,
            iat: 0,
            nbf: 0,
            token_type: "session".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_valid_token() {
        let admin_id = Uuid::new_v4();

        let mut tokens = MockTokenProviderMock::new();
        tokens
            .expect_verify_session_token()
            .returning(move |_| Ok(claims(admin_id)));

        let mut revocation = MockSessionRevocationMock::new();
        revocation.expect_is_revoked().returning(|_| Ok(false));

        let session = ResolveSessionService::new(Arc::new(tokens), Arc::new(revocation))
            .resolve("jwt")
            .await
            .unwrap();

        assert_eq!(session.admin_id, admin_id);
        assert_eq!(session.email, "owner@example.com");
        assert_eq!(session.expires_at, 4_102_444_800);
    }

    #[tokio::test]
    async fn test_resolve_revoked_token() {
        let mut tokens = MockTokenProviderMock::new();
        tokens
            .expect_verify_session_token()
            .returning(|_| Ok(claims(Uuid::new_v4())));

        let mut revocation = MockSessionRevocationMock::new();
        revocation.expect_is_revoked().returning(|_| Ok(true));

        let result = ResolveSessionService::new(Arc::new(tokens), Arc::new(revocation))
            .resolve("jwt")
            .await;

        assert_eq!(result, Err(ResolveSessionError::Revoked));
    }

    #[tokio::test]
    async fn test_resolve_expired_token_skips_revocation_check() {
        let mut tokens = MockTokenProviderMock::new();
        tokens
            .expect_verify_session_token()
            .returning(|_| Err(TokenError::TokenExpired));

        let mut revocation = MockSessionRevocationMock::new();
        revocation.expect_is_revoked().never();

        let result = ResolveSessionService::new(Arc::new(tokens), Arc::new(revocation))
            .resolve("jwt")
            .await;

        assert_eq!(result, Err(ResolveSessionError::Expired));
    }

    #[tokio::test]
    async fn test_resolve_forged_token() {
        let mut tokens = MockTokenProviderMock::new();
        tokens
            .expect_verify_session_token()
            .returning(|_| Err(TokenError::InvalidSignature));

        let result = ResolveSessionService::new(
            Arc::new(tokens),
            Arc::new(MockSessionRevocationMock::new()),
        )
        .resolve("forged")
        .await;

        assert_eq!(result, Err(ResolveSessionError::InvalidToken));
    }

    #[tokio::test]
    async fn test_resolve_revocation_store_failure() {
        let mut tokens = MockTokenProviderMock::new();
        tokens
            .expect_verify_session_token()
            .returning(|_| Ok(claims(Uuid::new_v4())));

        let mut revocation = MockSessionRevocationMock::new();
        revocation
            .expect_is_revoked()
            .returning(|_| Err(RevocationError::StoreError("timeout".to_string())));

        let result = ResolveSessionService::new(Arc::new(tokens), Arc::new(revocation))
            .resolve("jwt")
            .await;

        assert!(matches!(
            result,
            Err(ResolveSessionError::RevocationCheckFailed(_))
        ));
    }
}
