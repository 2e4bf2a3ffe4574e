use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::warn;

use crate::content::application::{
    domain::entities::{CollectionEntry, Stored},
    ports::{
        incoming::use_cases::{CollectionError, CollectionUseCase},
        outgoing::{Document, DocumentStore, DocumentStoreError},
    },
};

/// The CRUD pattern shared by every admin-managed collection.
#[derive(Debug)]
pub struct CollectionService<E, S>
where
    S: DocumentStore,
{
    store: S,
    _entry: PhantomData<fn() -> E>,
}

impl<E, S> Clone for CollectionService<E, S>
where
    S: DocumentStore + Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entry: PhantomData,
        }
    }
}

impl<E, S> CollectionService<E, S>
where
    E: CollectionEntry,
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entry: PhantomData,
        }
    }

    fn encode(entry: &E) -> Result<serde_json::Value, CollectionError> {
        serde_json::to_value(entry).map_err(|e| CollectionError::StoreError(e.to_string()))
    }

    fn decode(document: Document) -> Result<Stored<E>, CollectionError> {
        let entry = serde_json::from_value::<E>(document.data)
            .map_err(|e| CollectionError::StoreError(e.to_string()))?;

        Ok(Stored {
            id: document.id,
            entry,
        })
    }
}

fn map_store_error(err: DocumentStoreError) -> CollectionError {
    match err {
        DocumentStoreError::NotFound => CollectionError::NotFound,
        other => CollectionError::StoreError(other.to_string()),
    }
}

#[async_trait]
impl<E, S> CollectionUseCase<E> for CollectionService<E, S>
where
    E: CollectionEntry,
    S: DocumentStore,
{
    async fn list(&self) -> Result<Vec<Stored<E>>, CollectionError> {
        let documents = self
            .store
            .list(E::COLLECTION)
            .await
            .map_err(map_store_error)?;

        let entries = documents
            .into_iter()
            .filter_map(|document| {
                let id = document.id.clone();
                match Self::decode(document) {
                    Ok(stored) => Some(stored),
                    Err(e) => {
                        warn!(
                            collection = E::COLLECTION,
                            document_id = %id,
                            error = %e,
                            "Skipping undecodable document"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(entries)
    }

    async fn create(&self, entry: E) -> Result<Stored<E>, CollectionError> {
        entry.validate()?;

        let document = self
            .store
            .add(E::COLLECTION, Self::encode(&entry)?)
            .await
            .map_err(map_store_error)?;

        Ok(Stored {
            id: document.id,
            entry,
        })
    }

    async fn update(&self, id: &str, entry: E) -> Result<Stored<E>, CollectionError> {
        entry.validate()?;

        let document = self
            .store
            .update(E::COLLECTION, id, Self::encode(&entry)?)
            .await
            .map_err(map_store_error)?;

        Ok(Stored {
            id: document.id,
            entry,
        })
    }

    async fn delete(&self, id: &str) -> Result<(), CollectionError> {
        self.store
            .delete(E::COLLECTION, id)
            .await
            .map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::content::application::domain::entities::{
        Certificate, EntryValidationError, Experience, Project,
    };
    use crate::content::application::domain::list_input::parse_list;
    use crate::tests::support::in_memory_store::{FailingDocumentStore, InMemoryDocumentStore};

    fn certificate(title: &str) -> Certificate {
        Certificate {
            issuer: "Coursera".to_string(),
            title: title.to_string(),
            year: "2024".to_string(),
        }
    }

    // ──────────────────────────────────────────────────────────
    // create / list
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn created_entry_is_listed_with_submitted_fields() {
        let service = CollectionService::<Certificate, _>::new(InMemoryDocumentStore::new());

        let created = service.create(certificate("Deep Learning")).await.unwrap();
        let listed = service.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].entry, certificate("Deep Learning"));
    }

    #[tokio::test]
    async fn experience_skills_survive_round_trip_through_store() {
        let service = CollectionService::<Experience, _>::new(InMemoryDocumentStore::new());

        let entry = Experience {
            company: "Acme".to_string(),
            role: "Backend Engineer".to_string(),
            skills: parse_list("React, Node, SQL"),
            ..Default::default()
        };

        service.create(entry).await.unwrap();
        let listed = service.list().await.unwrap();

        assert_eq!(listed[0].entry.skills, vec!["React", "Node", "SQL"]);
    }

    #[tokio::test]
    async fn invalid_entry_is_not_written() {
        let store = InMemoryDocumentStore::new();
        let service = CollectionService::<Certificate, _>::new(store.clone());

        let result = service.create(certificate("")).await;

        assert!(matches!(
            result,
            Err(CollectionError::Validation(
                EntryValidationError::MissingField { field: "title" }
            ))
        ));
        assert_eq!(store.count("certificates"), 0);
    }

    #[tokio::test]
    async fn list_skips_documents_of_the_wrong_shape() {
        let store = InMemoryDocumentStore::new();
        store.insert_raw("certificates", "broken", json!({ "title": 42 }));
        store.insert_raw(
            "certificates",
            "fine",
            json!({ "issuer": "AWS", "title": "SAA", "year": "2022" }),
        );

        let service = CollectionService::<Certificate, _>::new(store);
        let listed = service.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "fine");
    }

    // ──────────────────────────────────────────────────────────
    // update
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn update_overwrites_in_place() {
        let service = CollectionService::<Project, _>::new(InMemoryDocumentStore::new());

        let created = service
            .create(Project {
                title: "Chatbot".to_string(),
                category: "AI".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = service
            .update(
                &created.id,
                Project {
                    title: "Chatbot v2".to_string(),
                    category: "AI".to_string(),
                    technologies: vec!["Rust".to_string()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].entry.title, "Chatbot v2");
    }

    #[tokio::test]
    async fn update_of_missing_entry_is_not_found() {
        let service = CollectionService::<Certificate, _>::new(InMemoryDocumentStore::new());

        let result = service.update("missing", certificate("X")).await;

        assert!(matches!(result, Err(CollectionError::NotFound)));
    }

    // ──────────────────────────────────────────────────────────
    // delete
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_removes_only_from_own_collection() {
        let store = InMemoryDocumentStore::new();
        store.insert_raw("certificates", "shared-id", json!(certificate("A")));
        store.insert_raw(
            "education",
            "shared-id",
            json!({ "institution": "MIT", "degree": "MSc" }),
        );

        let service = CollectionService::<Certificate, _>::new(store.clone());
        service.delete("shared-id").await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
        assert_eq!(store.count("education"), 1);
    }

    #[tokio::test]
    async fn delete_of_absent_entry_succeeds() {
        let service = CollectionService::<Certificate, _>::new(InMemoryDocumentStore::new());

        assert!(service.delete("never-existed").await.is_ok());
    }

    #[tokio::test]
    async fn store_failure_is_mapped() {
        let service = CollectionService::<Certificate, _>::new(FailingDocumentStore::new("db down"));

        match service.list().await {
            Err(CollectionError::StoreError(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected StoreError, got {:?}", other),
        }
    }
}
