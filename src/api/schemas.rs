//! Documentation-only mirrors of the `shared::api` envelope.
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of every 4xx/5xx response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `VALIDATION_ERROR`, `ENTRY_NOT_FOUND`, `UNAUTHORIZED`,
    /// `INVALID_CREDENTIALS`, `EMPTY_EMAIL`, `INVALID_EMAIL`, `EMPTY_PASSWORD`,
    /// `EMPTY_NAME`, `EMPTY_MESSAGE`, `SECTION_NOT_FOUND`, `EMAIL_SEND_FAILED`,
    /// `INTERNAL_ERROR`
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    #[schema(example = "title cannot be empty")]
    pub message: String,
}
