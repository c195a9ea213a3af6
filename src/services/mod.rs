//! Application services layer - Use cases and business logic.
//!
//! Services validate records before they reach a repository. They
//! depend on the `Repository` trait, never on a concrete store.

pub mod container;
mod crud_service;

// Service Container
pub use container::Services;

// Service trait and implementation
pub use crud_service::{CrudService, Manager};
