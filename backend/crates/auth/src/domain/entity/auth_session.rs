//! Auth Session Entity
//!
//! Server-side record behind a session cookie. The cookie only carries the
//! signed session id; principal and role live here.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub principal: String,
    /// Role at sign-in time
    pub role: Role,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// TTL comes from configuration, not from here.
    pub fn new(principal: impl Into<String>, role: Role, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            principal: principal.into(),
            role,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.principal.clone(), self.role.clone())
    }
}
