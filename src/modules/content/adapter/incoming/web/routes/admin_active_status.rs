use actix_web::{get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminSession,
    content::application::ports::incoming::use_cases::ActiveStatusError,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetActiveStatusRequest {
    pub status: bool,
}

/// Current availability flag; a never-written flag reads as inactive.
#[utoipa::path(
    get,
    path = "/api/admin/active-status",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current active status"),
        (status = 401, description = "No session", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/admin/active-status")]
pub async fn get_active_status(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.active_status.get().await {
        Ok(status) => ApiResponse::success(status.unwrap_or_default()),
        Err(err) => map_active_status_error(err),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/active-status",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = SetActiveStatusRequest,
    responses(
        (status = 200, description = "Stored active status"),
        (status = 401, description = "No session", body = crate::api::schemas::ErrorResponse)
    )
)]
#[put("/api/admin/active-status")]
pub async fn set_active_status(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<SetActiveStatusRequest>,
) -> impl Responder {
    match data.active_status.set(payload.status).await {
        Ok(status) => ApiResponse::success(status),
        Err(err) => map_active_status_error(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/active-status/toggle",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Flipped active status"),
        (status = 401, description = "No session", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/admin/active-status/toggle")]
pub async fn toggle_active_status(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.active_status.toggle().await {
        Ok(status) => ApiResponse::success(status),
        Err(err) => map_active_status_error(err),
    }
}

fn map_active_status_error(err: ActiveStatusError) -> HttpResponse {
    match err {
        ActiveStatusError::StoreError(msg) => {
            error!(error = %msg, "Active status store failure");
            ApiResponse::internal_error()
        }
    }
}
