//! Storage backend selection.
//!
//! Builds one repository per entity for the configured backend.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::{MemoryStore, Repository};
use crate::config::{STORAGE_MEMORY, STORAGE_REDIS, STORAGE_SQLITE};
use crate::domain::{Category, Currency, Cycle, Subscription};
use crate::errors::{AppError, AppResult};

/// Known storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Redis,
    Sqlite,
}

impl FromStr for StorageKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            STORAGE_MEMORY => Ok(StorageKind::Memory),
            STORAGE_REDIS => Ok(StorageKind::Redis),
            STORAGE_SQLITE => Ok(StorageKind::Sqlite),
            _ => Err(AppError::UndefinedStorage(s.to_string())),
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::Memory => f.write_str(STORAGE_MEMORY),
            StorageKind::Redis => f.write_str(STORAGE_REDIS),
            StorageKind::Sqlite => f.write_str(STORAGE_SQLITE),
        }
    }
}

/// One repository per entity type.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn Repository<Category>>,
    pub currencies: Arc<dyn Repository<Currency>>,
    pub cycles: Arc<dyn Repository<Cycle>>,
    pub subscriptions: Arc<dyn Repository<Subscription>>,
}

impl Repositories {
    /// Fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(MemoryStore::<Category>::new()),
            currencies: Arc::new(MemoryStore::<Currency>::new()),
            cycles: Arc::new(MemoryStore::<Cycle>::new()),
            subscriptions: Arc::new(MemoryStore::<Subscription>::new()),
        }
    }

    /// Build repositories for a backend. Only `memory` is implemented.
    pub fn for_storage(kind: StorageKind) -> AppResult<Self> {
        match kind {
            StorageKind::Memory => Ok(Self::in_memory()),
            StorageKind::Redis | StorageKind::Sqlite => Err(AppError::NotImplemented),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_storage_kind() {
        assert_eq!("memory".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert_eq!(" Memory ".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert_eq!("sqlite".parse::<StorageKind>().unwrap(), StorageKind::Sqlite);
        assert!(matches!(
            "postgres".parse::<StorageKind>(),
            Err(AppError::UndefinedStorage(name)) if name == "postgres"
        ));
    }

    #[test]
    fn test_only_memory_is_built() {
        assert!(Repositories::for_storage(StorageKind::Memory).is_ok());
        assert!(matches!(
            Repositories::for_storage(StorageKind::Redis),
            Err(AppError::NotImplemented)
        ));
    }
}
