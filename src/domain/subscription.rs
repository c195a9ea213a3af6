//! Subscription domain entity.
//!
//! A subscription embeds copies of the category, currency and cycle it
//! was created with. Later changes to those records do not propagate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::record::{EntityKind, KeyPolicy, Record, StoreKey};
use super::{Category, Currency, Cycle};
use crate::errors::{AppError, AppResult};

/// Wire format of `next_payment_date`
pub const PAYMENT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Subscription {
    pub id: u64,
    #[validate(length(min = 1))]
    pub name: String,
    pub note: String,
    pub logo: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    pub category: Category,
    #[validate(custom(function = "validate_currency_ref"))]
    pub currency: Currency,
    #[validate(custom(function = "validate_cycle_ref"))]
    pub cycle: Cycle,
    pub next_payment_date: NaiveDate,
}

fn validate_currency_ref(currency: &Currency) -> Result<(), ValidationError> {
    if currency.code.is_blank() {
        return Err(ValidationError::new("currency_code_required"));
    }
    Ok(())
}

fn validate_cycle_ref(cycle: &Cycle) -> Result<(), ValidationError> {
    if cycle.id.is_blank() {
        return Err(ValidationError::new("cycle_id_required"));
    }
    Ok(())
}

impl Record for Subscription {
    type Key = u64;

    const KIND: EntityKind = EntityKind::Subscription;
    const KEY_POLICY: KeyPolicy = KeyPolicy::Sequential;

    fn key(&self) -> u64 {
        self.id
    }

    fn set_issued_key(&mut self, id: u64) {
        self.id = id;
    }
}

/// Parse a `YYYY-MM-DD` payment date.
///
/// Empty or malformed input is `InvalidPaymentDate`, never a generic
/// decode error.
pub fn parse_payment_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), PAYMENT_DATE_FORMAT)
        .map_err(|_| AppError::InvalidPaymentDate)
}

pub fn format_payment_date(date: NaiveDate) -> String {
    date.format(PAYMENT_DATE_FORMAT).to_string()
}
