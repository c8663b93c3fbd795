//! Presentation Layer
//!
//! HTTP handlers, identity extractor, access guard middleware, router.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::CurrentIdentity;
pub use handlers::AuthAppState;
pub use middleware::{AccessGuardState, access_guard};
pub use router::{auth_router, auth_router_generic, with_access_guard};
