use async_trait::async_trait;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;

use crate::content::application::ports::outgoing::{Document, DocumentStore, DocumentStoreError};

/// Insertion-ordered document store shared between clones.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Seeds a document without going through the port.
    pub fn insert_raw(&self, collection: &str, id: &str, data: Value) {
        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection.to_string()).or_default();
        docs.retain(|d| d.id != id);
        docs.push(Document {
            id: id.to_string(),
            data,
        });
    }

    pub fn get_raw(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .map(|d| d.data.clone())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Ok(self.get_raw(collection, id).map(|data| Document {
            id: id.to_string(),
            data,
        }))
    }

    async fn add(&self, collection: &str, data: Value) -> Result<Document, DocumentStoreError> {
        let id: String = Uuid::new_v4().simple().to_string().chars().take(20).collect();
        self.insert_raw(collection, &id, data.clone());
        Ok(Document { id, data })
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DocumentStoreError> {
        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|d| d.id == id) {
            Some(existing) => existing.data = data.clone(),
            None => docs.push(Document {
                id: id.to_string(),
                data: data.clone(),
            }),
        }
        Ok(Document {
            id: id.to_string(),
            data,
        })
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> Result<Document, DocumentStoreError> {
        let mut collections = self.collections.lock().unwrap();
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or(DocumentStoreError::NotFound)?;
        existing.data = data.clone();
        Ok(Document {
            id: id.to_string(),
            data,
        })
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        if let Some(docs) = self.collections.lock().unwrap().get_mut(collection) {
            docs.retain(|d| d.id != id);
        }
        Ok(())
    }
}

/// Store whose every call fails with a database error.
#[derive(Clone)]
pub struct FailingDocumentStore {
    message: String,
}

impl FailingDocumentStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, DocumentStoreError> {
        Err(DocumentStoreError::Database(self.message.clone()))
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn list(&self, _: &str) -> Result<Vec<Document>, DocumentStoreError> {
        self.fail()
    }

    async fn get(&self, _: &str, _: &str) -> Result<Option<Document>, DocumentStoreError> {
        self.fail()
    }

    async fn add(&self, _: &str, _: Value) -> Result<Document, DocumentStoreError> {
        self.fail()
    }

    async fn set(&self, _: &str, _: &str, _: Value) -> Result<Document, DocumentStoreError> {
        self.fail()
    }

    async fn update(&self, _: &str, _: &str, _: Value) -> Result<Document, DocumentStoreError> {
        self.fail()
    }

    async fn delete(&self, _: &str, _: &str) -> Result<(), DocumentStoreError> {
        self.fail()
    }
}
