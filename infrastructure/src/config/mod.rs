//! Configuration file loading for docbase-cli
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--token` / `--domain` flags and `DOCBASE_API_TOKEN` / `DOCBASE_DOMAIN`
//! 2. `--config <path>` specified file
//! 3. Project root: `./docbase.toml` or `./.docbase.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/docbase/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod settings;

pub use file_config::{
    DEFAULT_BASE_URL, DEFAULT_POST_FORMAT, DEFAULT_TIMEOUT_SECS, FileApiConfig, FileConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
pub use settings::{ApiSettings, ConfigError};
