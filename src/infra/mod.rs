//! Infrastructure layer - Storage concerns
//!
//! - Repository contract and the in-memory implementation
//! - Storage backend selection

pub mod repositories;
pub mod storage;

pub use repositories::{MemoryStore, Repository};
pub use storage::{Repositories, StorageKind};
