use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

pub const SESSION_TOKEN_TYPE: &str = "session";

/// Clock skew tolerated past `exp` when verifying a session token.
pub const TOKEN_LEEWAY_SECS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidTokenType(String),
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidTokenType(found) => write!(f, "Invalid token type: {}", found),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}

impl Error for TokenError {}

/// JWT claims of a console session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,          // Admin ID
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String, // always "session"
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, admin_id: Uuid, email: &str) -> Result<IssuedToken, TokenError>;

    /// Checks signature, lifetime and token type.
    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
