use std::sync::Arc;

use crate::content::application::{
    domain::entities::{Certificate, CollectionEntry, Education, Experience, Project},
    ports::{incoming::use_cases::CollectionUseCase, outgoing::DocumentStore},
    services::CollectionService,
};

pub type CollectionHandle<E> = Arc<dyn CollectionUseCase<E> + Send + Sync>;

#[derive(Clone)]
pub struct ContentUseCases {
    pub certificates: CollectionHandle<Certificate>,
    pub education: CollectionHandle<Education>,
    pub experience: CollectionHandle<Experience>,
    pub projects: CollectionHandle<Project>,
}

impl ContentUseCases {
    /// One collection service per entry type, all backed by `store`.
    pub fn from_store<S>(store: S) -> Self
    where
        S: DocumentStore + Clone + 'static,
    {
        Self {
            certificates: Arc::new(CollectionService::<Certificate, S>::new(store.clone())),
            education: Arc::new(CollectionService::<Education, S>::new(store.clone())),
            experience: Arc::new(CollectionService::<Experience, S>::new(store.clone())),
            projects: Arc::new(CollectionService::<Project, S>::new(store)),
        }
    }
}

/// Picks the use case that manages an entry type's collection.
pub trait ContentCollection: CollectionEntry {
    fn use_case(content: &ContentUseCases) -> &CollectionHandle<Self>;
}

impl ContentCollection for Certificate {
    fn use_case(content: &ContentUseCases) -> &CollectionHandle<Self> {
        &content.certificates
    }
}

impl ContentCollection for Education {
    fn use_case(content: &ContentUseCases) -> &CollectionHandle<Self> {
        &content.education
    }
}

impl ContentCollection for Experience {
    fn use_case(content: &ContentUseCases) -> &CollectionHandle<Self> {
        &content.experience
    }
}

impl ContentCollection for Project {
    fn use_case(content: &ContentUseCases) -> &CollectionHandle<Self> {
        &content.projects
    }
}
