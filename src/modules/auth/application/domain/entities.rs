use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A console account. Admins are provisioned out of band; there is no
/// sign-up flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
}

/// The signed-in state carried by a valid session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Session {
    pub admin_id: Uuid,
    pub email: String,
    /// Unix timestamp after which the session token is rejected
    pub expires_at: i64,
}

impl Session {
    /// Seconds left before expiry, zero once expired.
    pub fn remaining_secs(&self, now: i64) -> u64 {
        u64::try_from(self.expires_at - now).unwrap_or(0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Credentials
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email format is invalid")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Sign-in input with the email normalized to lower case.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(CredentialsError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(CredentialsError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
