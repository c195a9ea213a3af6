//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Application
// =============================================================================

/// Crate version, reported by `/health` and `version`
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default listen address when no config file is given
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default request read timeout in seconds
pub const DEFAULT_READ_TIMEOUT_SECONDS: u64 = 15;

// =============================================================================
// Storage
// =============================================================================

pub const STORAGE_MEMORY: &str = "memory";
pub const STORAGE_REDIS: &str = "redis";
pub const STORAGE_SQLITE: &str = "sqlite";

/// Default storage backend
pub const DEFAULT_STORAGE: &str = STORAGE_MEMORY;

// =============================================================================
// Environment overrides
// =============================================================================

pub const ENV_STORAGE: &str = "STORAGE";
pub const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
pub const ENV_READ_TIMEOUT_SECONDS: &str = "READ_TIMEOUT_SECONDS";
pub const ENV_SEED_DEFAULTS: &str = "SEED_DEFAULTS";
