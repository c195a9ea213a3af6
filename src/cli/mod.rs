//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `version` - Print the application version

pub mod args;

pub use args::{Cli, Commands};
