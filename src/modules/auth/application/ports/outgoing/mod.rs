pub mod admin_query;
pub mod admin_repository;
pub mod password_hasher;
pub mod session_revocation;
pub mod token_provider;

pub use admin_query::{AdminQuery, AdminQueryError};
pub use admin_repository::{AdminRepository, AdminRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_revocation::{RevocationError, SessionRevocation};
pub use token_provider::{
    IssuedToken, SessionClaims, TokenError, TokenProvider, TOKEN_LEEWAY_SECS,
};
