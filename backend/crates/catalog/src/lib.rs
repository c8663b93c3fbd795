//! Catalog (Reference Data) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Record kinds, the record contract, repository traits
//! - `application/` - Form binding, per-kind resources, the CRUD workflow
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - Generic handlers and routers
//!
//! ## Record kinds
//! Bid lists, curve points, ratings, rule names, trades and users. All six
//! go through one validated CRUD workflow; users add username uniqueness
//! and password hashing on top.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use domain::{CatalogStore, Record, Repository};
pub use error::{CatalogError, CatalogResult};
pub use infra::{MemoryCatalog, MemoryRepository, PgCatalogRepository};
pub use presentation::router::{catalog_router, catalog_router_generic, crud_router};
