use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::{
    adapter::incoming::web::routes::{
        SessionResponse, SignInAdmin, SignInRequestDto, SignInResponse, SignOutResponse,
    },
    application::domain::entities::Session,
};
use crate::contact::adapter::incoming::web::routes::{ContactRequestDto, ContactSentResponse};
use crate::content::adapter::incoming::web::routes::{
    AvailabilityResponse, SetActiveStatusRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content, admin content management and the contact form",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::sign_in_handler,
        crate::auth::adapter::incoming::web::routes::sign_out_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,

        // Admin endpoints
        crate::content::adapter::incoming::web::routes::get_active_status,
        crate::content::adapter::incoming::web::routes::set_active_status,
        crate::content::adapter::incoming::web::routes::toggle_active_status,

        // Public endpoints
        crate::content::adapter::incoming::web::routes::get_availability,
        crate::content::adapter::incoming::web::routes::get_public_projects,
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            SignInRequestDto,
            SignInResponse,
            SignInAdmin,
            SignOutResponse,
            SessionResponse,
            Session,

            // Content DTOs
            SetActiveStatusRequest,
            AvailabilityResponse,

            // Contact DTOs
            ContactRequestDto,
            ContactSentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and session endpoints"),
        (name = "admin", description = "Content management endpoints"),
        (name = "public", description = "Public site endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
