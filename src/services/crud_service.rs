//! CRUD service - Validation layer in front of a repository.
//!
//! One generic implementation serves every entity; the per-entity rule
//! table lives on the domain type via `validator::Validate`.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{Record, StoreKey};
use crate::errors::{AppError, AppResult};
use crate::infra::Repository;

/// CRUD use cases for one entity type.
#[async_trait]
pub trait CrudService<T: Record>: Send + Sync {
    /// Validate and store a new record
    async fn create(&self, record: T) -> AppResult<T>;

    /// Fetch by key; a blank key is never found
    async fn get(&self, key: &T::Key) -> AppResult<T>;

    /// List every stored record
    async fn list(&self) -> AppResult<Vec<T>>;

    /// Validate and fully replace an existing record
    async fn update(&self, record: T) -> AppResult<T>;

    /// Remove by key; a blank key is never found
    async fn delete(&self, key: &T::Key) -> AppResult<()>;
}

/// Concrete implementation of CrudService backed by any repository.
pub struct Manager<T: Record> {
    repo: Arc<dyn Repository<T>>,
}

impl<T: Record> Manager<T> {
    pub fn new(repo: Arc<dyn Repository<T>>) -> Self {
        Self { repo }
    }

    fn check(record: &T) -> AppResult<()> {
        record.validate().map_err(|errors| {
            tracing::debug!(kind = %T::KIND, %errors, "validation rejected");
            AppError::Invalid(T::KIND)
        })
    }
}

#[async_trait]
impl<T: Record> CrudService<T> for Manager<T> {
    async fn create(&self, record: T) -> AppResult<T> {
        Self::check(&record)?;
        self.repo.create(record).await
    }

    async fn get(&self, key: &T::Key) -> AppResult<T> {
        if key.is_blank() {
            return Err(AppError::NotFound(T::KIND));
        }
        self.repo.get(key).await
    }

    async fn list(&self) -> AppResult<Vec<T>> {
        self.repo.get_all().await
    }

    async fn update(&self, record: T) -> AppResult<T> {
        if record.key().is_blank() {
            tracing::debug!(kind = %T::KIND, "update without key rejected");
            return Err(AppError::Invalid(T::KIND));
        }
        Self::check(&record)?;
        self.repo.update(record).await
    }

    async fn delete(&self, key: &T::Key) -> AppResult<()> {
        if key.is_blank() {
            return Err(AppError::NotFound(T::KIND));
        }
        self.repo.delete(key).await
    }
}
