//! Billing cycle domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::record::{EntityKind, KeyPolicy, Record};

/// How often a subscription is billed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct Cycle {
    pub id: u64,
    #[validate(length(min = 1))]
    pub name: String,
    pub days: u64,
}

impl Cycle {
    pub fn new(name: impl Into<String>, days: u64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            days,
        }
    }

    pub fn weekly() -> Self {
        Self {
            id: 1,
            name: "Weekly".to_string(),
            days: 7,
        }
    }

    pub fn monthly() -> Self {
        Self {
            id: 2,
            name: "Monthly".to_string(),
            days: 30,
        }
    }

    pub fn yearly() -> Self {
        Self {
            id: 3,
            name: "Yearly".to_string(),
            days: 365,
        }
    }

    /// Cycles created when `seed_defaults` is enabled; a fresh store
    /// issues them the same ids they carry here.
    pub fn presets() -> Vec<Self> {
        vec![Self::weekly(), Self::monthly(), Self::yearly()]
    }
}

impl Record for Cycle {
    type Key = u64;

    const KIND: EntityKind = EntityKind::Cycle;
    const KEY_POLICY: KeyPolicy = KeyPolicy::Sequential;

    fn key(&self) -> u64 {
        self.id
    }

    fn set_issued_key(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(Cycle::new("", 7).validate().is_err());
        assert!(Cycle::new("Fortnightly", 14).validate().is_ok());
    }
}
