use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use super::cleared_session_cookie;
use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminSession,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Serialize, ToSchema)]
pub struct SignOutResponse {
    #[schema(example = "Signed out")]
    pub message: String,
}

/// Admin sign-out
///
/// Revokes the presented session token and clears the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed out", body = SignOutResponse),
        (status = 401, description = "No session", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn sign_out_handler(session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    if let Err(e) = data
        .sign_out
        .sign_out(&session.token, &session.session)
        .await
    {
        // The client still drops its session
        warn!(admin_id = %session.session.admin_id, error = %e, "Sign-out without revocation");
    }

    HttpResponse::Ok()
        .cookie(cleared_session_cookie())
        .json(ApiResponse::ok(SignOutResponse {
            message: "Signed out".to_string(),
        }))
}
