//! Infrastructure layer for docbase-cli
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod docbase;

// Re-export commonly used types
pub use config::{
    ApiSettings, ConfigError, ConfigLoader, DEFAULT_POST_FORMAT, FileApiConfig, FileConfig,
    FileOutputConfig,
};
pub use docbase::DocbaseClient;
