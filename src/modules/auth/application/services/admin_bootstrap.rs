use std::sync::Arc;
use tracing::info;

use crate::auth::application::{
    domain::entities::{Admin, Credentials, CredentialsError, NewAdmin},
    ports::outgoing::{
        AdminQuery, AdminQueryError, AdminRepository, AdminRepositoryError, HashError,
        PasswordHasher,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    Created(Admin),
    AlreadyPresent,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    #[error("Invalid admin credentials: {0}")]
    InvalidInput(#[from] CredentialsError),

    #[error(transparent)]
    Query(#[from] AdminQueryError),

    #[error(transparent)]
    Hashing(#[from] HashError),

    #[error("Could not store admin: {0}")]
    Repository(String),
}

/// Provisions the console account named in the environment on startup.
#[derive(Clone)]
pub struct AdminBootstrap {
    admins: Arc<dyn AdminQuery>,
    repository: Arc<dyn AdminRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AdminBootstrap {
    pub fn new(
        admins: Arc<dyn AdminQuery>,
        repository: Arc<dyn AdminRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            admins,
            repository,
            hasher,
        }
    }

    /// Creates the admin unless one with the same email exists. An existing
    /// admin's password is left untouched.
    pub async fn ensure_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<BootstrapOutcome, BootstrapError> {
        let credentials = Credentials::new(email, password)?;

        if self
            .admins
            .find_by_email(credentials.email())
            .await?
            .is_some()
        {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let password_hash = self.hasher.hash_password(credentials.password()).await?;

        let created = self
            .repository
            .create_admin(NewAdmin {
                email: credentials.email().to_string(),
                password_hash,
            })
            .await;

        match created {
            Ok(admin) => {
                info!(admin_id = %admin.id, "Provisioned admin account");
                Ok(BootstrapOutcome::Created(admin))
            }
            Err(AdminRepositoryError::AdminAlreadyExists) => Ok(BootstrapOutcome::AlreadyPresent),
            Err(e) => Err(BootstrapError::Repository(e.to_string())),
        }
    }
}
