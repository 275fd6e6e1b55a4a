//! Resolved API settings
//!
//! Merges command-line/environment values with the config file and
//! validates the result once at startup.

use super::file_config::FileApiConfig;
use docbase_domain::{Domain, DomainError};
use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

/// Errors resolving the startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API token is required (use --token or DOCBASE_API_TOKEN)")]
    MissingToken,

    #[error("Team domain is required (use --domain or DOCBASE_DOMAIN)")]
    MissingDomain,

    #[error(transparent)]
    InvalidDomain(#[from] DomainError),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Everything needed to talk to the API. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub domain: Domain,
    pub token: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiSettings {
    /// Flag/environment values win over the file. Blank values count as absent.
    pub fn resolve(
        domain: Option<String>,
        token: Option<String>,
        file: &FileApiConfig,
    ) -> Result<Self, ConfigError> {
        let token = first_present(token, file.token.clone()).ok_or(ConfigError::MissingToken)?;
        let domain =
            first_present(domain, file.domain.clone()).ok_or(ConfigError::MissingDomain)?;

        Ok(Self {
            domain: Domain::new(domain)?,
            token: SecretString::from(token),
            base_url: file.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(file.timeout_secs),
        })
    }
}

fn first_present(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred
        .filter(|v| !v.trim().is_empty())
        .or(fallback.filter(|v| !v.trim().is_empty()))
}
