use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::{
        domain::contact_message::{ContactMessage, ContactMessageError},
        ports::incoming::use_cases::SubmitContactError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Contact form payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequestDto {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "Collaboration")]
    pub subject: Option<String>,

    #[serde(default)]
    #[schema(example = "I'd like to talk about a project.")]
    pub message: String,

    pub phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ContactSentResponse {
    pub message: String,
}

/// Send a message to the site owner
#[utoipa::path(
    post,
    path = "/api/public/contact",
    tag = "public",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Message sent", body = inline(SuccessResponse<ContactSentResponse>)),
        (
            status = 400,
            description = "Missing or malformed field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_MESSAGE", "message": "Message cannot be empty" }
            })
        ),
        (status = 502, description = "Mail provider failed", body = ErrorResponse),
    )
)]
#[post("/api/public/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let message = match ContactMessage::new(
        &dto.name,
        &dto.email,
        dto.subject.as_deref(),
        &dto.message,
        dto.phone.as_deref(),
    ) {
        Ok(message) => message,
        Err(e) => return map_validation_error(e),
    };

    match data.submit_contact.submit(message).await {
        Ok(()) => ApiResponse::success(ContactSentResponse {
            message: "Message sent successfully".to_string(),
        }),
        Err(SubmitContactError::DeliveryFailed(_)) => {
            ApiResponse::bad_gateway("EMAIL_SEND_FAILED", "Failed to send message")
        }
    }
}

fn map_validation_error(err: ContactMessageError) -> HttpResponse {
    let code = match err {
        ContactMessageError::EmptyName => "EMPTY_NAME",
        ContactMessageError::EmptyEmail => "EMPTY_EMAIL",
        ContactMessageError::InvalidEmail => "INVALID_EMAIL",
        ContactMessageError::EmptyMessage => "EMPTY_MESSAGE",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
