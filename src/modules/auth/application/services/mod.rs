mod admin_bootstrap;
mod resolve_session_service;
mod sign_in_service;
mod sign_out_service;
pub mod token_hasher;

pub use admin_bootstrap::{AdminBootstrap, BootstrapError, BootstrapOutcome};
pub use resolve_session_service::ResolveSessionService;
pub use sign_in_service::SignInService;
pub use sign_out_service::SignOutService;
