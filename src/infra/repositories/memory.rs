//! In-memory repository guarded by a single mutex.
//!
//! Every operation holds the lock for its full duration, listing
//! included, so all access to one store is serialized. The guard is
//! never held across an `.await`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::Repository;
use crate::domain::{KeyPolicy, Record};
use crate::errors::{AppError, AppResult, OptionExt};

struct Inner<T: Record> {
    records: BTreeMap<T::Key, T>,
    /// Next id handed out by sequential stores; never reused.
    next_id: u64,
}

/// Process-lifetime store for one entity type.
pub struct MemoryStore<T: Record> {
    inner: Mutex<Inner<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Inner<T>>> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal(format!("{} store lock poisoned", T::KIND)))
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryStore<T> {
    async fn create(&self, mut record: T) -> AppResult<T> {
        let mut inner = self.lock()?;

        match T::KEY_POLICY {
            KeyPolicy::Sequential => {
                let id = inner.next_id;
                inner.next_id += 1;
                record.set_issued_key(id);
            }
            KeyPolicy::Natural => {
                if inner.records.contains_key(&record.key()) {
                    return Err(AppError::AlreadyExists(T::KIND));
                }
            }
        }

        inner.records.insert(record.key(), record.clone());
        tracing::debug!(kind = %T::KIND, key = %record.key(), "record created");
        Ok(record)
    }

    async fn get(&self, key: &T::Key) -> AppResult<T> {
        let inner = self.lock()?;
        inner.records.get(key).cloned().ok_or_not_found(T::KIND)
    }

    async fn get_all(&self) -> AppResult<Vec<T>> {
        let inner = self.lock()?;
        Ok(inner.records.values().cloned().collect())
    }

    async fn update(&self, record: T) -> AppResult<T> {
        let mut inner = self.lock()?;
        let slot = inner
            .records
            .get_mut(&record.key())
            .ok_or_not_found(T::KIND)?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, key: &T::Key) -> AppResult<()> {
        let mut inner = self.lock()?;
        inner
            .records
            .remove(key)
            .map(|_| ())
            .ok_or_not_found(T::KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Currency, EntityKind};

    #[tokio::test]
    async fn test_create_issues_sequential_ids() {
        let store = MemoryStore::<Category>::new();

        let first = store.create(Category::new("Streaming")).await.unwrap();
        let second = store.create(Category::new("Cloud")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get(&1).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_ids_are_not_reissued_after_delete() {
        let store = MemoryStore::<Category>::new();
        store.create(Category::new("a")).await.unwrap();
        let second = store.create(Category::new("b")).await.unwrap();

        store.delete(&1).await.unwrap();
        let third = store.create(Category::new("c")).await.unwrap();

        assert_eq!(third.id, 3);
        assert_eq!(store.get(&second.id).await.unwrap().name, "b");
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_empty_and_ordered() {
        let store = MemoryStore::<Category>::new();
        assert!(store.get_all().await.unwrap().is_empty());

        for name in ["x", "y", "z"] {
            store.create(Category::new(name)).await.unwrap();
        }
        let ids: Vec<u64> = store.get_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_keys_are_not_found() {
        let store = MemoryStore::<Category>::new();

        assert!(matches!(
            store.get(&99).await,
            Err(AppError::NotFound(EntityKind::Category))
        ));
        assert!(matches!(
            store.delete(&99).await,
            Err(AppError::NotFound(EntityKind::Category))
        ));

        let ghost = Category {
            id: 99,
            name: "ghost".to_string(),
        };
        assert!(matches!(
            store.update(ghost).await,
            Err(AppError::NotFound(EntityKind::Category))
        ));
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = MemoryStore::<Category>::new();
        let mut created = store.create(Category::new("old")).await.unwrap();

        created.name = "new".to_string();
        store.update(created.clone()).await.unwrap();

        assert_eq!(store.get(&created.id).await.unwrap().name, "new");
    }

    #[tokio::test]
    async fn test_currency_duplicate_code_is_rejected() {
        let store = MemoryStore::<Currency>::new();
        store.create(Currency::usd()).await.unwrap();

        let duplicate = Currency::new("USD", "Other Dollar", "D");
        assert!(matches!(
            store.create(duplicate).await,
            Err(AppError::AlreadyExists(EntityKind::Currency))
        ));
        assert_eq!(store.get(&"USD".to_string()).await.unwrap(), Currency::usd());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryStore::<Category>::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(Category::new(format!("c{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
