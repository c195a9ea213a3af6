//! Domain layer - Core business entities
//!
//! Plain value records for categories, currencies, billing cycles and
//! subscriptions, plus the `Record` contract that lets one generic
//! store and one generic service serve all of them.

pub mod category;
pub mod currency;
pub mod cycle;
pub mod record;
pub mod subscription;

pub use category::Category;
pub use currency::Currency;
pub use cycle::Cycle;
pub use record::{EntityKind, KeyPolicy, Record, StoreKey};
pub use subscription::{format_payment_date, parse_payment_date, Subscription, PAYMENT_DATE_FORMAT};
