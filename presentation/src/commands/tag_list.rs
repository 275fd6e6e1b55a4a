//! `tag list`

use super::{Command, CommandContext, CommandError};
use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use docbase_application::ListTagsUseCase;
use std::io::Write;

/// Print every tag name of the team
pub struct TagListCommand;

#[async_trait]
impl Command for TagListCommand {
    fn name(&self) -> &'static str {
        "tag list"
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        out: &mut (dyn Write + Send),
    ) -> Result<(), CommandError> {
        let tags = ListTagsUseCase::new(ctx.api.clone(), ctx.domain.clone())
            .with_cancellation(ctx.cancellation.clone())
            .execute()
            .await?;
        write!(out, "{}", ConsoleFormatter::format_tags(&tags))?;
        Ok(())
    }
}
