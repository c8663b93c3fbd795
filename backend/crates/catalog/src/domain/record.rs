//! Record Trait
//!
//! What the CRUD workflow needs from a stored entity, independent of its
//! business fields.

use chrono::NaiveDateTime;

/// A persisted back-office record.
///
/// `id` is `None` until the first insert and never changes afterwards.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i32>;

    /// Assigned by the repository on insert.
    fn set_id(&mut self, id: i32);

    /// Set the creation audit pair. Called once, before the first save.
    fn stamp_creation(&mut self, _actor: &str, _at: NaiveDateTime) {}

    /// Set the revision audit pair. Called before every update.
    fn stamp_revision(&mut self, _actor: &str, _at: NaiveDateTime) {}

    /// Unique business key, for kinds that have one.
    fn natural_key(&self) -> Option<&str> {
        None
    }
}
