//! Domain Layer
//!
//! Record kinds, the record contract and the repository trait.

pub mod entity;
pub mod record;
pub mod repository;

// Re-exports
pub use entity::{BidList, CurvePoint, Rating, RuleName, Trade, User};
pub use record::Record;
pub use repository::{CatalogStore, Repository};
