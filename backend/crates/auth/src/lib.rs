//! Auth (Authentication & Access) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity, user and session entities, repository traits
//! - `application/` - Sign-in/out and session use cases, route table
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - Login handlers, access guard middleware, router
//!
//! ## Modes
//! - Form login: username + password posted to `/login`
//! - Auto-login: every session-less request runs as a fixed guest
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper)
//! - Server-side sessions behind HMAC-signed cookie tokens
//! - First-match route table: `/user/**` requires ADMIN, static assets,
//!   `/login` and `/error` are open, everything else needs an identity

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, AuthMode};
pub use domain::{AuthSession, CredentialStore, Identity, Role, SessionStore, User};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemorySessionStore, postgres::PgAuthRepository};
pub use presentation::extract::CurrentIdentity;
pub use presentation::router::{auth_router, auth_router_generic, with_access_guard};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
