//! `post search`

use super::{Command, CommandContext, CommandError};
use crate::cli::commands::PostSearchArgs;
use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use docbase_application::{SearchPostsInput, SearchPostsUseCase};
use docbase_domain::ListOptions;
use std::io::Write;

/// Print every line of one page of posts that contains the text
pub struct PostSearchCommand {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl From<PostSearchArgs> for PostSearchCommand {
    fn from(args: PostSearchArgs) -> Self {
        Self {
            query: args.query,
            page: args.pages.page,
            per_page: args.pages.per_page,
        }
    }
}

#[async_trait]
impl Command for PostSearchCommand {
    fn name(&self) -> &'static str {
        "post search"
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        out: &mut (dyn Write + Send),
    ) -> Result<(), CommandError> {
        let options = ListOptions::new(self.page, self.per_page)?;
        let input = SearchPostsInput::new(self.query.as_str()).with_options(options);

        let output = SearchPostsUseCase::new(ctx.api.clone(), ctx.domain.clone())
            .with_cancellation(ctx.cancellation.clone())
            .execute(input)
            .await?;

        for m in &output.matches {
            writeln!(out, "{}", ConsoleFormatter::format_match(&ctx.domain, m))?;
        }
        Ok(())
    }
}
