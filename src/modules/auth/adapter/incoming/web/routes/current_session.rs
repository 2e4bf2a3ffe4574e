use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::AdminSession,
        application::domain::entities::Session,
    },
    shared::api::ApiResponse,
};

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub session: Session,
}

/// The caller's current session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 401, description = "No session", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn current_session_handler(session: AdminSession) -> impl Responder {
    ApiResponse::success(SessionResponse {
        session: session.session,
    })
}
