mod current_session;
#[path = "login_page.rs"]
mod login_page_route;
mod sign_in;
mod sign_out;

pub use current_session::{__path_current_session_handler, current_session_handler, SessionResponse};
pub use login_page_route::{login_page, FormField, LoginForm};
pub use sign_in::{__path_sign_in_handler, sign_in_handler, SignInAdmin, SignInRequestDto, SignInResponse};
pub use sign_out::{__path_sign_out_handler, sign_out_handler, SignOutResponse};

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use super::extractors::auth::SESSION_COOKIE;

fn session_cookie(token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

fn cleared_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .finish();
    cookie.make_removal();
    cookie
}
