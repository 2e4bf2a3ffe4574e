mod resolve_session;
mod sign_in;
mod sign_out;

pub use resolve_session::{ResolveSessionError, ResolveSessionUseCase};
pub use sign_in::{SignInError, SignInResult, SignInUseCase};
pub use sign_out::{SignOutError, SignOutUseCase};
