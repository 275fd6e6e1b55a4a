//! Presentation layer for docbase-cli
//!
//! This crate contains CLI definitions, the command registry, output
//! rendering and progress reporters.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Commands};
pub use commands::{Command, CommandContext, CommandError};
pub use config::{DEFAULT_POST_FORMAT, OutputConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputRenderer, RenderError, TemplateRenderer, render};
pub use progress::reporter::RenameReporter;
