use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use super::token_hasher::hash_token;
use crate::auth::application::{
    domain::entities::Session,
    ports::{
        incoming::use_cases::{SignOutError, SignOutUseCase},
        outgoing::{SessionRevocation, TOKEN_LEEWAY_SECS},
    },
    session_events::{SessionEvent, SessionEvents},
};

#[derive(Clone)]
pub struct SignOutService {
    revocation: Arc<dyn SessionRevocation>,
    events: SessionEvents,
}

impl SignOutService {
    pub fn new(revocation: Arc<dyn SessionRevocation>, events: SessionEvents) -> Self {
        Self { revocation, events }
    }
}

#[async_trait]
impl SignOutUseCase for SignOutService {
    async fn sign_out(&self, token: &str, session: &Session) -> Result<(), SignOutError> {
        // Verification still accepts the token for the leeway past `exp`
        let ttl = session.remaining_secs(Utc::now().timestamp() - TOKEN_LEEWAY_SECS);

        let revoked = if ttl == 0 {
            Ok(())
        } else {
            self.revocation
                .revoke(&hash_token(token), ttl)
                .await
                .map_err(|e| SignOutError::RevocationFailed(e.to_string()))
        };

        debug!(admin_id = %session.admin_id, "Session closed");
        self.events.publish(SessionEvent::SignedOut {
            admin_id: session.admin_id,
            email: session.email.clone(),
        });

        revoked
    }
}
