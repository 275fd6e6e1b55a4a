//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_POST_FORMAT: &str = "{{ title }}";

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default `--format` template for `post list` and `post get`
    pub post_format: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            post_format: DEFAULT_POST_FORMAT.to_string(),
            color: true,
        }
    }
}
