//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::error::AuthResult;

/// Lookup of user records by login name
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Exact, case-sensitive match on the username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;
}

/// Server-side session storage
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Record activity on a live session
    async fn touch(&self, session_id: Uuid, at: DateTime<Utc>) -> AuthResult<()>;

    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Delete every expired session, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
