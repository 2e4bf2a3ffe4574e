use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::{Admin, NewAdmin};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;
}

#[derive(Debug, Clone)]
pub enum AdminRepositoryError {
    AdminAlreadyExists,
    DatabaseError(String),
}

impl fmt::Display for AdminRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminRepositoryError::AdminAlreadyExists => write!(f, "Admin already exists"),
            AdminRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AdminRepositoryError {}
