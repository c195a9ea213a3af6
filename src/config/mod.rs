//! Application configuration module
//!
//! Handles the config file, environment overrides and application-wide
//! constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
