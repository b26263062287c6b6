//! Configuration file handling.

#[expect(clippy::module_inception, reason = "I like it this way")]
mod config;

pub use config::{AttributesConfig, CONFIG_FILE_NAME, Config, ControlConfig, DEFAULT_CONFIG_TOML, QueryConfig};
