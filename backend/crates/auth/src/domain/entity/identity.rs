//! Session Identity
//!
//! The authenticated principal for one request. Produced by a successful
//! credential check, by an existing session, or by the auto-login guest,
//! and handed to handlers through request extensions.

use serde::Serialize;

use crate::domain::value_object::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub principal: String,
    pub authorities: Vec<Role>,
}

impl Identity {
    pub fn new(principal: impl Into<String>, role: Role) -> Self {
        Self {
            principal: principal.into(),
            authorities: vec![role],
        }
    }

    pub fn has_role(&self, required: &str) -> bool {
        self.authorities.iter().any(|role| role.satisfies(required))
    }

    /// First granted role. Identities always carry at least one.
    pub fn primary_role(&self) -> Option<&Role> {
        self.authorities.first()
    }
}
