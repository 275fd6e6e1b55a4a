//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod api;
mod output;

pub use api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileApiConfig};
pub use output::{DEFAULT_POST_FORMAT, FileOutputConfig};

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// API connection settings
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}
