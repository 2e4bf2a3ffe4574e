use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::application::{
    domain::entities::{Credentials, Session},
    ports::{
        incoming::use_cases::{SignInError, SignInResult, SignInUseCase},
        outgoing::{AdminQuery, PasswordHasher, TokenProvider},
    },
    session_events::{SessionEvent, SessionEvents},
};

#[derive(Clone)]
pub struct SignInService {
    admins: Arc<dyn AdminQuery>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    events: SessionEvents,
}

impl SignInService {
    pub fn new(
        admins: Arc<dyn AdminQuery>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        events: SessionEvents,
    ) -> Self {
        Self {
            admins,
            hasher,
            tokens,
            events,
        }
    }
}

#[async_trait]
impl SignInUseCase for SignInService {
    async fn sign_in(&self, credentials: Credentials) -> Result<SignInResult, SignInError> {
        let admin = self
            .admins
            .find_by_email(credentials.email())
            .await
            .map_err(|e| SignInError::Internal(e.to_string()))?;

        let Some(admin) = admin else {
            warn!(email = %credentials.email(), "Sign-in attempt for unknown admin");
            return Err(SignInError::InvalidCredentials);
        };

        let valid = self
            .hasher
            .verify_password(credentials.password(), &admin.password_hash)
            .await
            .map_err(|e| SignInError::Internal(e.to_string()))?;

        if !valid {
            warn!(admin_id = %admin.id, "Sign-in attempt with wrong password");
            return Err(SignInError::InvalidCredentials);
        }

        let issued = self
            .tokens
            .issue_session_token(admin.id, &admin.email)
            .map_err(|e| SignInError::Internal(e.to_string()))?;

        debug!(admin_id = %admin.id, "Session token issued");
        self.events.publish(SessionEvent::SignedIn {
            admin_id: admin.id,
            email: admin.email.clone(),
        });

        Ok(SignInResult {
            token: issued.token,
            session: Session {
                admin_id: admin.id,
                email: admin.email,
                expires_at: issued.expires_at,
            },
        })
    }
}
