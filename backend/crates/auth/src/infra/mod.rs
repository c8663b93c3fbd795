//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod memory;
pub mod postgres;

pub use memory::MemorySessionStore;
pub use postgres::PgAuthRepository;
