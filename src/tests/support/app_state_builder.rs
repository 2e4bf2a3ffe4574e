use actix_web::web;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ResolveSessionUseCase, SignInUseCase, SignOutUseCase,
};
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::content::application::{
    content_use_cases::ContentUseCases,
    ports::{incoming::use_cases::ActiveStatusUseCase, outgoing::DocumentStore},
    services::ActiveStatusService,
};
use crate::tests::support::{in_memory_store::InMemoryDocumentStore, stubs::*};
use crate::AppState;

pub const TEST_ACTIVE_STATUS_ID: &str = "current";

/// Real content services over an in-memory store, stubbed auth and contact.
pub struct TestAppStateBuilder {
    content: ContentUseCases,
    active_status: Arc<dyn ActiveStatusUseCase + Send + Sync>,
    sign_in: Arc<dyn SignInUseCase + Send + Sync>,
    sign_out: Arc<dyn SignOutUseCase + Send + Sync>,
    resolve_session: Arc<dyn ResolveSessionUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = InMemoryDocumentStore::new();
        Self {
            content: ContentUseCases::from_store(store.clone()),
            active_status: Arc::new(ActiveStatusService::new(store, TEST_ACTIVE_STATUS_ID)),
            sign_in: Arc::new(StubSignInUseCase::default()),
            sign_out: Arc::new(StubSignOutUseCase::ok()),
            resolve_session: Arc::new(StubResolveSessionUseCase),
            submit_contact: Arc::new(StubSubmitContactUseCase::ok()),
        }
    }
}

impl TestAppStateBuilder {
    /// Rebuilds every content service on top of `store`.
    pub fn with_content_store<S>(mut self, store: S) -> Self
    where
        S: DocumentStore + Clone + 'static,
    {
        self.content = ContentUseCases::from_store(store.clone());
        self.active_status = Arc::new(ActiveStatusService::new(store, TEST_ACTIVE_STATUS_ID));
        self
    }

    pub fn with_sign_in(mut self, uc: impl SignInUseCase + 'static) -> Self {
        self.sign_in = Arc::new(uc);
        self
    }

    pub fn with_sign_out(mut self, uc: impl SignOutUseCase + 'static) -> Self {
        self.sign_out = Arc::new(uc);
        self
    }

    pub fn with_resolve_session(mut self, uc: impl ResolveSessionUseCase + 'static) -> Self {
        self.resolve_session = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactUseCase + 'static) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
            active_status: self.active_status,
            sign_in: self.sign_in,
            sign_out: self.sign_out,
            resolve_session: self.resolve_session,
            submit_contact: self.submit_contact,
        })
    }
}
