//! `post get`

use super::{Command, CommandContext, CommandError};
use crate::cli::commands::PostGetArgs;
use crate::output::formatter::{OutputRenderer, TemplateRenderer};
use async_trait::async_trait;
use docbase_application::GetPostUseCase;
use docbase_domain::PostId;
use std::io::Write;

/// Render a single post
pub struct PostGetCommand {
    pub id: PostId,
    pub format: Option<String>,
}

impl From<PostGetArgs> for PostGetCommand {
    fn from(args: PostGetArgs) -> Self {
        Self {
            id: args.id,
            format: args.format,
        }
    }
}

#[async_trait]
impl Command for PostGetCommand {
    fn name(&self) -> &'static str {
        "post get"
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        out: &mut (dyn Write + Send),
    ) -> Result<(), CommandError> {
        let renderer = TemplateRenderer::compile(ctx.output.post_format(self.format.as_deref()))?;
        let post = GetPostUseCase::new(ctx.api.clone(), ctx.domain.clone())
            .with_cancellation(ctx.cancellation.clone())
            .execute(self.id)
            .await?;
        writeln!(out, "{}", renderer.render_post(&post)?)?;
        Ok(())
    }
}
