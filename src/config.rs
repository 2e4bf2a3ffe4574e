use std::{env, str::FromStr};

use crate::{
    auth::adapter::outgoing::jwt::JwtConfig,
    contact::adapter::outgoing::{EmailJsConfig, SmtpConfig},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Reads a variable that must be present and non-empty.
pub fn require_var<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Parses an optional variable, falling back to `default` when unset.
pub fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::Invalid {
                    name,
                    reason: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Argon2Params {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            memory_kib: parse_var(lookup, "ARGON2_MEMORY_KIB", 19 * 1024)?,
            iterations: parse_var(lookup, "ARGON2_ITERATIONS", 2)?,
            parallelism: parse_var(lookup, "ARGON2_PARALLELISM", 1)?,
        })
    }
}

#[derive(Debug, Clone)]
pub enum ContactTransport {
    EmailJs(EmailJsConfig),
    Smtp(SmtpConfig),
}

impl ContactTransport {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = lookup("CONTACT_TRANSPORT").unwrap_or_else(|| "emailjs".to_string());

        match transport.trim().to_ascii_lowercase().as_str() {
            "emailjs" => Ok(Self::EmailJs(EmailJsConfig::from_lookup(lookup)?)),
            "smtp" => Ok(Self::Smtp(SmtpConfig::from_lookup(lookup)?)),
            other => Err(ConfigError::Invalid {
                name: "CONTACT_TRANSPORT",
                reason: format!("expected `emailjs` or `smtp`, got `{other}`"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    /// Admin account provisioned on startup when both variables are set
    pub admin_seed: Option<AdminSeed>,
    pub active_status_doc_id: String,
    pub argon2: Argon2Params,
    pub contact: ContactTransport,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_seed = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminSeed { email, password })
            }
            _ => None,
        };

        Ok(Self {
            database_url: require_var(lookup, "DATABASE_URL")?,
            redis_url: require_var(lookup, "REDIS_URL")?,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(lookup, "PORT", 8080)?,
            jwt: JwtConfig::from_lookup(lookup)?,
            admin_seed,
            active_status_doc_id: lookup("ACTIVE_STATUS_DOC_ID")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "current".to_string()),
            argon2: Argon2Params::from_lookup(lookup)?,
            contact: ContactTransport::from_lookup(lookup)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
