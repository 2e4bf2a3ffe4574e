use crate::config::{parse_var, require_var, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const MAX_SESSION_EXPIRY: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = require_var(lookup, "JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let session_expiry: i64 = parse_var(lookup, "JWT_SESSION_EXPIRY", 8 * 3600)?;
        if session_expiry <= 0 || session_expiry > MAX_SESSION_EXPIRY {
            return Err(ConfigError::Invalid {
                name: "JWT_SESSION_EXPIRY",
                reason: format!("must be between 1 and {MAX_SESSION_EXPIRY} seconds"),
            });
        }

        Ok(Self {
            secret_key,
            session_expiry,
        })
    }
}
