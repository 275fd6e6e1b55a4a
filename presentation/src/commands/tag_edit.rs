//! `tag edit`

use super::{Command, CommandContext, CommandError};
use crate::cli::commands::TagEditArgs;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::RenameReporter;
use async_trait::async_trait;
use docbase_application::{
    NoRenameProgress, RenameProgressNotifier, RenameTagsInput, RenameTagsUseCase,
};
use docbase_domain::RenameMapping;
use std::io::Write;

/// Rename tags on every post that carries them
pub struct TagEditCommand {
    pub tags: Vec<String>,
    pub dry_run: bool,
}

impl From<TagEditArgs> for TagEditCommand {
    fn from(args: TagEditArgs) -> Self {
        Self {
            tags: args.tags,
            dry_run: args.dry_run,
        }
    }
}

#[async_trait]
impl Command for TagEditCommand {
    fn name(&self) -> &'static str {
        "tag edit"
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        out: &mut (dyn Write + Send),
    ) -> Result<(), CommandError> {
        let mapping = RenameMapping::parse(&self.tags)?;
        let mut input = RenameTagsInput::new(mapping);
        if self.dry_run {
            input = input.dry_run();
        }

        let progress: Box<dyn RenameProgressNotifier> = if ctx.output.show_progress {
            Box::new(RenameReporter::new().with_color(ctx.output.color))
        } else {
            Box::new(NoRenameProgress)
        };

        let report = RenameTagsUseCase::new(ctx.api.clone(), ctx.domain.clone())
            .with_cancellation(ctx.cancellation.clone())
            .execute_with_progress(input, progress.as_ref())
            .await?;

        let formatter = ConsoleFormatter::new(ctx.output.color);
        write!(out, "{}", formatter.format_rename_report(&report))?;
        Ok(())
    }
}
