mod active_status_use_case;
mod collection_use_case;

pub use active_status_use_case::{ActiveStatusError, ActiveStatusUseCase};
pub use collection_use_case::{CollectionError, CollectionUseCase};
