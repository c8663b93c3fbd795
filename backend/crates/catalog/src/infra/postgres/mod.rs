//! PostgreSQL Repository Implementations
//!
//! One repository handle implements [`Repository`](crate::domain::Repository)
//! for every record kind; each kind's SQL lives in its own module.

mod bid_list;
mod curve_point;
mod rating;
mod rule_name;
mod trade;
mod user;

use sqlx::PgPool;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
