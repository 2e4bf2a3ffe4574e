mod admin_active_status;
mod admin_collections;
mod admin_pages;
mod public_content;

pub use admin_active_status::{
    __path_get_active_status, __path_set_active_status, __path_toggle_active_status,
    get_active_status, set_active_status, toggle_active_status, SetActiveStatusRequest,
};
pub use admin_collections::configure_admin_collections;
pub use admin_pages::{admin_dashboard, admin_section_page};
pub use public_content::{
    __path_get_availability, __path_get_public_projects, get_availability, get_public_experience, get_public_projects, get_sections, get_skills,
    AvailabilityResponse,
};

use actix_web::HttpResponse;
use tracing::error;

use crate::{
    content::application::ports::incoming::use_cases::CollectionError, shared::api::ApiResponse,
};

fn map_collection_error(err: CollectionError) -> HttpResponse {
    match err {
        CollectionError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        CollectionError::NotFound => ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found"),
        CollectionError::StoreError(msg) => {
            error!(error = %msg, "Collection store failure");
            ApiResponse::internal_error()
        }
    }
}
