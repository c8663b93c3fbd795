//! User Entity
//!
//! An application account: login name, password hash, display name and
//! a single role. The id is `None` until the record is first stored.

use platform::password::HashedPassword;

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i32>,
    /// Unique login name
    pub username: String,
    /// Never leaves the server
    pub password_hash: HashedPassword,
    pub fullname: String,
    pub role: Role,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password_hash: HashedPassword,
        fullname: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: None,
            username: username.into(),
            password_hash,
            fullname: fullname.into(),
            role,
        }
    }

    /// Identity granted after this user's credentials check out.
    pub fn identity(&self) -> Identity {
        Identity::new(self.username.clone(), self.role.clone())
    }
}
