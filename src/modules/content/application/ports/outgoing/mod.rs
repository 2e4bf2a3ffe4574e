mod document_store;

pub use document_store::{Document, DocumentStore, DocumentStoreError};
