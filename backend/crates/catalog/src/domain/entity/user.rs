//! User records are owned by the auth crate; the catalog only manages them.

pub use auth::User;

use crate::domain::record::Record;

impl Record for User {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.username)
    }
}
