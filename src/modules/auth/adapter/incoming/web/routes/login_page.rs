use actix_web::{get, Responder};
use serde::Serialize;

use crate::{auth::adapter::incoming::web::extractors::auth::AdminSession, shared::api::ApiResponse};

#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub input_type: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// What the login page renders: where to post and which fields to collect.
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub action: &'static str,
    pub method: &'static str,
    pub fields: [FormField; 2],
    /// Where to go once signed in
    pub redirect_to: &'static str,
}

const LOGIN_FORM: LoginForm = LoginForm {
    action: "/api/auth/login",
    method: "POST",
    fields: [
        FormField {
            name: "email",
            input_type: "email",
            label: "Email",
            required: true,
        },
        FormField {
            name: "password",
            input_type: "password",
            label: "Password",
            required: true,
        },
    ],
    redirect_to: "/admin",
};

/// Signed-in visitors go straight to the dashboard.
#[get("/login")]
pub async fn login_page(session: Option<AdminSession>) -> impl Responder {
    if session.is_some() {
        return ApiResponse::see_other(LOGIN_FORM.redirect_to);
    }

    ApiResponse::success(LOGIN_FORM)
}
