use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::auth::application::{
    domain::entities::{Credentials, Session},
    ports::incoming::use_cases::{
        ResolveSessionError, ResolveSessionUseCase, SignInError, SignInResult, SignInUseCase,
        SignOutError, SignOutUseCase,
    },
};
use crate::contact::application::{
    domain::contact_message::ContactMessage,
    ports::incoming::use_cases::{SubmitContactError, SubmitContactUseCase},
};
use crate::tests::support::auth_helper::{TEST_ADMIN_EMAIL, TEST_ADMIN_ID, TEST_TOKEN};

pub fn test_session() -> Session {
    Session {
        admin_id: TEST_ADMIN_ID,
        email: TEST_ADMIN_EMAIL.to_string(),
        expires_at: Utc::now().timestamp() + 3600,
    }
}

/// Accepts `TEST_TOKEN` and nothing else.
#[derive(Clone, Default)]
pub struct StubResolveSessionUseCase;

#[async_trait]
impl ResolveSessionUseCase for StubResolveSessionUseCase {
    async fn resolve(&self, token: &str) -> Result<Session, ResolveSessionError> {
        if token == TEST_TOKEN {
            Ok(test_session())
        } else {
            Err(ResolveSessionError::InvalidToken)
        }
    }
}

#[derive(Clone)]
pub enum StubSignInUseCase {
    Success(String),
    InvalidCredentials,
    Internal(String),
}

impl StubSignInUseCase {
    pub fn success(token: &str) -> Self {
        Self::Success(token.to_string())
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn internal(msg: &str) -> Self {
        Self::Internal(msg.to_string())
    }
}

impl Default for StubSignInUseCase {
    fn default() -> Self {
        Self::success(TEST_TOKEN)
    }
}

#[async_trait]
impl SignInUseCase for StubSignInUseCase {
    async fn sign_in(&self, _credentials: Credentials) -> Result<SignInResult, SignInError> {
        match self {
            Self::Success(token) => Ok(SignInResult {
                token: token.clone(),
                session: test_session(),
            }),
            Self::InvalidCredentials => Err(SignInError::InvalidCredentials),
            Self::Internal(msg) => Err(SignInError::Internal(msg.clone())),
        }
    }
}

#[derive(Clone, Default)]
pub struct StubSignOutUseCase {
    failure: Option<String>,
}

impl StubSignOutUseCase {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl SignOutUseCase for StubSignOutUseCase {
    async fn sign_out(&self, _token: &str, _session: &Session) -> Result<(), SignOutError> {
        match &self.failure {
            Some(msg) => Err(SignOutError::RevocationFailed(msg.clone())),
            None => Ok(()),
        }
    }
}

/// Counts submissions so tests can assert the mailer path was (not) taken.
#[derive(Clone, Default)]
pub struct StubSubmitContactUseCase {
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl StubSubmitContactUseCase {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn submit(&self, _message: ContactMessage) -> Result<(), SubmitContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(msg) => Err(SubmitContactError::DeliveryFailed(msg.clone())),
            None => Ok(()),
        }
    }
}
