//! Presentation Layer
//!
//! Generic CRUD handlers and the catalog router.

pub mod handlers;
pub mod router;

pub use handlers::CrudState;
pub use router::{catalog_router, catalog_router_generic, crud_router};
