//! API connection configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.docbase.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Team domain (`myteam` for myteam.docbase.io)
    pub domain: Option<String>,
    /// Access token. Prefer the environment variable over storing it here.
    pub token: Option<String>,
    /// API endpoint
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            domain: None,
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
