//! Currency domain entity, keyed by its ISO code.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::record::{EntityKind, KeyPolicy, Record};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct Currency {
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub symbol: String,
}

impl Currency {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    pub fn usd() -> Self {
        Self::new("USD", "US Dollar", "$")
    }

    pub fn rub() -> Self {
        Self::new("RUB", "Russian Ruble", "₽")
    }

    /// Currencies created when `seed_defaults` is enabled.
    pub fn presets() -> Vec<Self> {
        vec![Self::usd(), Self::rub()]
    }
}

impl Record for Currency {
    type Key = String;

    const KIND: EntityKind = EntityKind::Currency;
    const KEY_POLICY: KeyPolicy = KeyPolicy::Natural;

    fn key(&self) -> String {
        self.code.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_required() {
        assert!(Currency::usd().validate().is_ok());
        assert!(Currency::new("", "US Dollar", "$").validate().is_err());
        assert!(Currency::new("USD", "", "$").validate().is_err());
        assert!(Currency::new("USD", "US Dollar", "").validate().is_err());
    }
}
