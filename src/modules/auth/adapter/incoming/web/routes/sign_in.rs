use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::session_cookie;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::application::{
        domain::entities::Credentials, ports::incoming::use_cases::SignInError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Sign-in request from the login form
#[derive(Deserialize, ToSchema)]
pub struct SignInRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignInResponse {
    /// Session token, also set as the `session` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Unix timestamp at which the session ends
    pub expires_at: i64,

    pub admin: SignInAdmin,
}

#[derive(Serialize, ToSchema)]
pub struct SignInAdmin {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "owner@example.com")]
    pub email: String,
}

/// Admin sign-in
///
/// Verifies email and password and opens a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = SignInRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<SignInResponse>)),
        (
            status = 400,
            description = "Malformed credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_EMAIL", "message": "Email format is invalid" }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn sign_in_handler(
    req: web::Json<SignInRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let credentials = match Credentials::new(&dto.email, &dto.password) {
        Ok(credentials) => credentials,
        Err(e) => return map_sign_in_error(SignInError::InvalidInput(e)),
    };

    match data.sign_in.sign_in(credentials).await {
        Ok(result) => {
            let max_age = result.session.expires_at - Utc::now().timestamp();

            HttpResponse::Ok()
                .cookie(session_cookie(result.token.clone(), max_age))
                .json(ApiResponse::ok(SignInResponse {
                    access_token: result.token,
                    expires_at: result.session.expires_at,
                    admin: SignInAdmin {
                        id: result.session.admin_id.to_string(),
                        email: result.session.email,
                    },
                }))
        }
        Err(e) => map_sign_in_error(e),
    }
}

fn map_sign_in_error(err: SignInError) -> HttpResponse {
    use crate::auth::application::domain::entities::CredentialsError;

    match err {
        SignInError::InvalidInput(CredentialsError::EmptyEmail) => {
            ApiResponse::bad_request("EMPTY_EMAIL", "Email cannot be empty")
        }
        SignInError::InvalidInput(CredentialsError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email format is invalid")
        }
        SignInError::InvalidInput(CredentialsError::EmptyPassword) => {
            ApiResponse::bad_request("EMPTY_PASSWORD", "Password cannot be empty")
        }
        SignInError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        SignInError::Internal(msg) => {
            error!(error = %msg, "Sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
