//! Shared contract for every persisted entity.
//!
//! A `Record` tells the generic store how it is keyed and the generic
//! service how it is validated, so the four entities need no
//! hand-duplicated repository or service code.

use std::fmt::{self, Debug, Display};

use validator::Validate;

/// Entity kinds, used for error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Currency,
    Cycle,
    Subscription,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Currency => "currency",
            EntityKind::Cycle => "cycle",
            EntityKind::Subscription => "subscription",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a store obtains the key of a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// The store issues the next integer from its counter.
    Sequential,
    /// The record carries its own key; duplicates are rejected.
    Natural,
}

/// Key types usable by the in-memory store.
pub trait StoreKey: Ord + Clone + Debug + Display + Send + Sync + 'static {
    /// The zero value, which never identifies a stored record.
    fn is_blank(&self) -> bool;
}

impl StoreKey for u64 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl StoreKey for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// A persisted domain record.
///
/// `Validate` is the rule table checked by the service before any
/// create or update reaches the store.
pub trait Record: Clone + Debug + Validate + Send + Sync + 'static {
    type Key: StoreKey;

    const KIND: EntityKind;
    const KEY_POLICY: KeyPolicy;

    fn key(&self) -> Self::Key;

    /// Receive a store-issued key. Only called for `KeyPolicy::Sequential`.
    fn set_issued_key(&mut self, _id: u64) {}
}
