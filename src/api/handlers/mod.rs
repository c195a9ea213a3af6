//! HTTP request handlers.

pub mod category_handler;
pub mod currency_handler;
pub mod cycle_handler;
pub mod health_handler;
pub mod subscription_handler;

pub use category_handler::category_routes;
pub use currency_handler::currency_routes;
pub use cycle_handler::cycle_routes;
pub use health_handler::health;
pub use subscription_handler::subscription_routes;

use crate::domain::EntityKind;
use crate::errors::{AppError, AppResult};

/// Parse a numeric identifier taken from the path.
fn parse_id(raw: &str, kind: EntityKind) -> AppResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::bad_request(format!("invalid {} id: {}", kind, raw)))
}
