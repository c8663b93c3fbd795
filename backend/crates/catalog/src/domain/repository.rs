//! Repository Trait
//!
//! One generic persistence boundary shared by every record kind.
//! Implementation is in infrastructure layer.

use std::future::Future;

use crate::domain::entity::{BidList, CurvePoint, Rating, RuleName, Trade, User};
use crate::domain::record::Record;
use crate::error::CatalogResult;

/// Persistence for records of kind `E`.
///
/// Futures are `Send` so handlers can hold them across `.await` on the
/// multi-threaded runtime.
pub trait Repository<E: Record>: Send + Sync + 'static {
    /// Every record, in ascending id order.
    fn find_all(&self) -> impl Future<Output = CatalogResult<Vec<E>>> + Send;

    fn find_by_id(&self, id: i32) -> impl Future<Output = CatalogResult<Option<E>>> + Send;

    /// Insert when `record.id()` is `None`, otherwise update that row.
    /// Returns the stored record with its id set.
    fn save(&self, record: E) -> impl Future<Output = CatalogResult<E>> + Send;

    fn delete_by_id(&self, id: i32) -> impl Future<Output = CatalogResult<()>> + Send;

    fn exists_by_id(&self, id: i32) -> impl Future<Output = CatalogResult<bool>> + Send;

    /// Lookup by [`Record::natural_key`]. Kinds without one never match.
    fn find_by_natural_key(
        &self,
        _key: &str,
    ) -> impl Future<Output = CatalogResult<Option<E>>> + Send {
        async { Ok(None) }
    }
}

/// Storage for the whole catalog: one repository handle covering every
/// record kind.
pub trait CatalogStore:
    Repository<BidList>
    + Repository<CurvePoint>
    + Repository<Rating>
    + Repository<RuleName>
    + Repository<Trade>
    + Repository<User>
{
}

impl<T> CatalogStore for T where
    T: Repository<BidList>
        + Repository<CurvePoint>
        + Repository<Rating>
        + Repository<RuleName>
        + Repository<Trade>
        + Repository<User>
{
}
