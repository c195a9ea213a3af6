//! Base repository contract shared by every entity store.

use async_trait::async_trait;

use crate::domain::Record;
use crate::errors::AppResult;

/// Keyed CRUD storage for one entity type.
///
/// Implementations return owned copies; nothing handed out aliases the
/// stored value.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Insert a record, issuing its key for sequential stores.
    ///
    /// Natural-key stores reject an existing key with `AlreadyExists`.
    async fn create(&self, record: T) -> AppResult<T>;

    /// Fetch by key, `NotFound` when absent
    async fn get(&self, key: &T::Key) -> AppResult<T>;

    /// All records, ascending by key
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// Fully replace the record stored under `record.key()`
    async fn update(&self, record: T) -> AppResult<T>;

    /// Remove by key, `NotFound` when absent
    async fn delete(&self, key: &T::Key) -> AppResult<()>;
}
