mod active_status_service;
mod collection_service;
pub mod project_filter;

pub use active_status_service::ActiveStatusService;
pub use collection_service::CollectionService;
