//! Shared types used across layers.

mod response;

pub use response::{ApiResponse, STATUS_ERROR, STATUS_SUCCESS};
