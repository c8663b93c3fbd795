//! Role Value Object
//!
//! Roles are an open set of strings ("ADMIN", "USER", ...) stored verbatim.
//! Comparison ignores a leading `ROLE_`, so a user stored as `ROLE_ADMIN`
//! and one stored as `ADMIN` both satisfy an `ADMIN` requirement.

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const ROLE_PREFIX: &str = "ROLE_";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Role(String);

impl Role {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// The role exactly as stored.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The role without its `ROLE_` prefix.
    #[inline]
    pub fn name(&self) -> &str {
        strip_prefix(&self.0)
    }

    /// Whether this role satisfies `required`.
    pub fn satisfies(&self, required: &str) -> bool {
        self.name() == strip_prefix(required.trim())
    }
}

fn strip_prefix(role: &str) -> &str {
    role.strip_prefix(ROLE_PREFIX).unwrap_or(role)
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
