//! Configuration model for promptrun.
//!
//! This module defines the Config struct that represents `promptrun.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, environment overrides, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use operations::{DEFAULT_CONFIG_FILE, ENV_BASE_URL, ENV_MODEL};
