//! Application Layer
//!
//! Use cases and application services.

pub mod access_policy;
pub mod check_session;
pub mod config;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use access_policy::{Access, AccessRule, Decision, RouteTable};
pub use check_session::CheckSessionUseCase;
pub use config::{AuthConfig, AuthMode};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
