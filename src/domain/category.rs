//! Category domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::record::{EntityKind, KeyPolicy, Record};

/// Grouping label for subscriptions (e.g. "Streaming").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct Category {
    pub id: u64,
    #[validate(length(min = 1))]
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

impl Record for Category {
    type Key = u64;

    const KIND: EntityKind = EntityKind::Category;
    const KEY_POLICY: KeyPolicy = KeyPolicy::Sequential;

    fn key(&self) -> u64 {
        self.id
    }

    fn set_issued_key(&mut self, id: u64) {
        self.id = id;
    }
}
