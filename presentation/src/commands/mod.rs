//! Command registry
//!
//! Every subcommand is a [`Command`] value built from the parsed clap
//! arguments. The binary resolves the parsed subcommand into one of these
//! and runs it against a shared [`CommandContext`].

mod post_get;
mod post_list;
mod post_search;
mod tag_edit;
mod tag_list;

#[cfg(test)]
pub(crate) mod stub_api;

pub use post_get::PostGetCommand;
pub use post_list::PostListCommand;
pub use post_search::PostSearchCommand;
pub use tag_edit::TagEditCommand;
pub use tag_list::TagListCommand;

use crate::cli::commands::{Commands, PostCommands, TagCommands};
use crate::config::OutputConfig;
use crate::output::formatter::RenderError;
use async_trait::async_trait;
use docbase_application::{DocbaseApi, FetchError, RenameTagsError};
use docbase_domain::{Domain, DomainError};
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors surfaced by a command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Rename(#[from] RenameTagsError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Whether the command stopped because of Ctrl-C
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_cancelled(),
            Self::Rename(RenameTagsError::Cancelled { .. }) => true,
            _ => false,
        }
    }
}

/// Everything a command needs to run
pub struct CommandContext {
    pub api: Arc<dyn DocbaseApi>,
    pub domain: Domain,
    pub cancellation: CancellationToken,
    pub output: OutputConfig,
}

impl CommandContext {
    pub fn new(api: Arc<dyn DocbaseApi>, domain: Domain) -> Self {
        Self {
            api,
            domain,
            cancellation: CancellationToken::new(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

/// A runnable subcommand
#[async_trait]
pub trait Command: Send + Sync {
    /// Name as typed on the command line (e.g. `post search`)
    fn name(&self) -> &'static str;

    /// Run the command, writing results to `out`
    async fn run(
        &self,
        ctx: &CommandContext,
        out: &mut (dyn Write + Send),
    ) -> Result<(), CommandError>;
}

impl From<Commands> for Box<dyn Command> {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Post { command } => match command {
                PostCommands::Search(args) => Box::new(PostSearchCommand::from(args)),
                PostCommands::List(args) => Box::new(PostListCommand::from(args)),
                PostCommands::Get(args) => Box::new(PostGetCommand::from(args)),
            },
            Commands::Tag { command } => match command {
                TagCommands::List => Box::new(TagListCommand),
                TagCommands::Edit(args) => Box::new(TagEditCommand::from(args)),
            },
        }
    }
}
