//! Subscriptions - A JSON API for tracking recurring payments
//!
//! Subscriptions reference a category, a billing cycle and a currency;
//! all four are managed through the same CRUD surface.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities and their validation rules
//! - **services**: Validation in front of the repositories
//! - **infra**: Repositories and storage backend selection
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: The response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- --config config.toml serve
//!
//! # Print the version
//! cargo run -- version
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Category, Currency, Cycle, Subscription};
pub use errors::{AppError, AppResult};
