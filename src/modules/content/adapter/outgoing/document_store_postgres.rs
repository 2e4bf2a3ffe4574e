use async_trait::async_trait;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value;
use std::sync::Arc;

use crate::content::application::ports::outgoing::{Document, DocumentStore, DocumentStoreError};

// SeaORM entity
use super::sea_orm_entity::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as DocumentEntity,
    Model as DocumentModel,
};

const DOCUMENT_ID_LEN: usize = 20;

fn generate_document_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}

fn database_error(e: DbErr) -> DocumentStoreError {
    DocumentStoreError::Database(e.to_string())
}

/// Document store on a single Postgres table keyed by `(collection, id)`.
#[derive(Debug, Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        let models: Vec<DocumentModel> = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection))
            .order_by_asc(DocumentColumn::CreatedAt)
            .order_by_asc(DocumentColumn::Id)
            .all(&*self.db)
            .await
            .map_err(database_error)?;

        Ok(models.iter().map(DocumentModel::to_document).collect())
    }

    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let model = DocumentEntity::find_by_id((collection.to_string(), id.to_string()))
            .one(&*self.db)
            .await
            .map_err(database_error)?;

        Ok(model.as_ref().map(DocumentModel::to_document))
    }

    async fn add(&self, collection: &str, data: Value) -> Result<Document, DocumentStoreError> {
        let now = Utc::now().fixed_offset();
        let active = DocumentActiveModel {
            collection: Set(collection.to_string()),
            id: Set(generate_document_id()),
            data: Set(data),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted: DocumentModel = active.insert(&*self.db).await.map_err(database_error)?;

        Ok(inserted.to_document())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DocumentStoreError> {
        let now = Utc::now().fixed_offset();
        let active = DocumentActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.to_string()),
            data: Set(data),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let upserted = DocumentEntity::insert(active)
            .on_conflict(
                OnConflict::columns([DocumentColumn::Collection, DocumentColumn::Id])
                    .update_columns([DocumentColumn::Data, DocumentColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(database_error)?;

        Ok(upserted.to_document())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DocumentStoreError> {
        let active = DocumentActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id.to_string()),
            data: Set(data),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        match active.update(&*self.db).await {
            Ok(model) => Ok(model.to_document()),
            Err(DbErr::RecordNotUpdated) => Err(DocumentStoreError::NotFound),
            Err(e) => Err(database_error(e)),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        DocumentEntity::delete_many()
            .filter(DocumentColumn::Collection.eq(collection))
            .filter(DocumentColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
