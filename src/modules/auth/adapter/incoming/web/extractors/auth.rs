use actix_web::{
    dev::Payload, http::header, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use tracing::{debug, error};

use crate::{
    auth::application::{
        domain::entities::Session, ports::incoming::use_cases::ResolveSessionError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Name of the HttpOnly cookie that carries the session token.
pub const SESSION_COOKIE: &str = "session";

/// A signed-in admin. Extraction fails with a 401 JSON body when the request
/// carries no valid, unrevoked session token.
///
/// Page handlers take `Option<AdminSession>` and redirect instead.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session: Session,
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "UNAUTHORIZED",
        "A signed-in session is required",
    ))
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_session_token(req);

        Box::pin(async move {
            let Some(state) = state else {
                error!("AppState missing while resolving session");
                return Err(create_api_error(ApiResponse::internal_error()));
            };
            let token = token.ok_or_else(unauthorized)?;

            match state.resolve_session.resolve(&token).await {
                Ok(session) => Ok(AdminSession { session, token }),
                Err(ResolveSessionError::RevocationCheckFailed(msg)) => {
                    error!(error = %msg, "Could not check session revocation");
                    Err(unauthorized())
                }
                Err(e) => {
                    debug!(reason = %e, "Rejected session token");
                    Err(unauthorized())
                }
            }
        })
    }
}

/// Bearer header first, then the session cookie.
pub fn extract_session_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    })
}
