use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admins::ActiveModel as AdminActiveModel;
use crate::auth::application::{
    domain::entities::{Admin, NewAdmin},
    ports::outgoing::{AdminRepository, AdminRepositoryError},
};

#[derive(Clone, Debug)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        let active = AdminActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(admin.email),
            password_hash: Set(admin.password_hash),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return AdminRepositoryError::AdminAlreadyExists;
            }
            AdminRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    use crate::auth::adapter::outgoing::sea_orm_entity::admins::Model as AdminModel;

    fn new_admin() -> NewAdmin {
        NewAdmin {
            email: "owner@example.com".to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_admin_returns_inserted_row() {
        let model = AdminModel {
            id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
            created_at: Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let admin = AdminRepositoryPostgres::new(Arc::new(db))
            .create_admin(new_admin())
            .await
            .unwrap();

        assert_eq!(admin.id, model.id);
        assert_eq!(admin.email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_create_admin_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"admins_email_key\"".to_string(),
            ))])
            .into_connection();

        let result = AdminRepositoryPostgres::new(Arc::new(db))
            .create_admin(new_admin())
            .await;

        assert!(matches!(result, Err(AdminRepositoryError::AdminAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_admin_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("pool exhausted".to_string())])
            .into_connection();

        let result = AdminRepositoryPostgres::new(Arc::new(db))
            .create_admin(new_admin())
            .await;

        assert!(matches!(result, Err(AdminRepositoryError::DatabaseError(_))));
    }
}
