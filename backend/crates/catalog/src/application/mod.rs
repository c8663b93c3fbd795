//! Application Layer
//!
//! Form binding, the per-kind resources and the generic CRUD workflow.

pub mod config;
pub mod form;
pub mod resource;
pub mod resources;
pub mod workflow;

// Re-exports
pub use config::CatalogConfig;
pub use form::FormFields;
pub use resource::{FormMode, FormModel, Kind, NaturalKey, Resource};
pub use workflow::{CrudWorkflow, Outcome};
