//! In-memory repositories
//!
//! Used by tests and by the server when it runs without a database.

use std::collections::BTreeMap;

use auth::{AuthError, AuthResult, CredentialStore};
use tokio::sync::RwLock;

use crate::domain::entity::{BidList, CurvePoint, Rating, RuleName, Trade, User};
use crate::domain::record::Record;
use crate::domain::repository::Repository;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug)]
struct Table<E> {
    rows: BTreeMap<i32, E>,
    next_id: i32,
}

/// Records of one kind, in id order. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryRepository<E> {
    table: RwLock<Table<E>>,
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E: Record> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `records`, ids assigned in order.
    pub fn with_records(records: impl IntoIterator<Item = E>) -> Self {
        let mut table = Table {
            rows: BTreeMap::new(),
            next_id: 1,
        };
        for mut record in records {
            let id = table.next_id;
            table.next_id += 1;
            record.set_id(id);
            table.rows.insert(id, record);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

impl<E: Record> Repository<E> for MemoryRepository<E> {
    async fn find_all(&self) -> CatalogResult<Vec<E>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<E>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut record: E) -> CatalogResult<E> {
        let mut table = self.table.write().await;

        let unique_key_taken = record.natural_key().is_some_and(|key| {
            table
                .rows
                .values()
                .any(|other| other.natural_key() == Some(key) && other.id() != record.id())
        });
        if unique_key_taken {
            return Err(CatalogError::Internal(
                "unique key constraint violated".to_string(),
            ));
        }

        let id = match record.id() {
            Some(id) => {
                if !table.rows.contains_key(&id) {
                    // Same shape as an `UPDATE ... RETURNING` that matched nothing.
                    return Err(CatalogError::Database(sqlx::Error::RowNotFound));
                }
                id
            }
            None => {
                let id = table.next_id;
                table.next_id += 1;
                record.set_id(id);
                id
            }
        };

        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn find_by_natural_key(&self, key: &str) -> CatalogResult<Option<E>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|record| record.natural_key() == Some(key))
            .cloned())
    }
}

// ============================================================================
// Whole catalog
// ============================================================================

/// One in-memory repository per record kind.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    pub bid_lists: MemoryRepository<BidList>,
    pub curve_points: MemoryRepository<CurvePoint>,
    pub ratings: MemoryRepository<Rating>,
    pub rule_names: MemoryRepository<RuleName>,
    pub trades: MemoryRepository<Trade>,
    pub users: MemoryRepository<User>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! delegate_repository {
    ($entity:ty, $field:ident) => {
        impl Repository<$entity> for MemoryCatalog {
            async fn find_all(&self) -> CatalogResult<Vec<$entity>> {
                self.$field.find_all().await
            }

            async fn find_by_id(&self, id: i32) -> CatalogResult<Option<$entity>> {
                self.$field.find_by_id(id).await
            }

            async fn save(&self, record: $entity) -> CatalogResult<$entity> {
                self.$field.save(record).await
            }

            async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
                self.$field.delete_by_id(id).await
            }

            async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
                self.$field.exists_by_id(id).await
            }

            async fn find_by_natural_key(&self, key: &str) -> CatalogResult<Option<$entity>> {
                self.$field.find_by_natural_key(key).await
            }
        }
    };
}

delegate_repository!(BidList, bid_lists);
delegate_repository!(CurvePoint, curve_points);
delegate_repository!(Rating, ratings);
delegate_repository!(RuleName, rule_names);
delegate_repository!(Trade, trades);
delegate_repository!(User, users);

/// Sign-in reads the same users the admin screens manage.
impl CredentialStore for MemoryCatalog {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        self.users
            .find_by_natural_key(username)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}
