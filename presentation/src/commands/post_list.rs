//! `post list`

use super::{Command, CommandContext, CommandError};
use crate::cli::commands::PostListArgs;
use crate::output::formatter::{OutputRenderer, TemplateRenderer};
use async_trait::async_trait;
use docbase_application::{ListPostsInput, ListPostsUseCase, PostPager};
use docbase_domain::{ListOptions, Query};
use std::io::Write;
use tracing::debug;

/// Render one page of posts, or every page with `--all`
pub struct PostListCommand {
    pub query: Option<String>,
    pub page: u32,
    pub per_page: u32,
    pub format: Option<String>,
    pub all: bool,
}

impl From<PostListArgs> for PostListCommand {
    fn from(args: PostListArgs) -> Self {
        Self {
            query: args.query,
            page: args.pages.page,
            per_page: args.pages.per_page,
            format: args.format,
            all: args.all,
        }
    }
}

#[async_trait]
impl Command for PostListCommand {
    fn name(&self) -> &'static str {
        "post list"
    }

    async fn run(
        &self,
        ctx: &CommandContext,
        out: &mut (dyn Write + Send),
    ) -> Result<(), CommandError> {
        let renderer = TemplateRenderer::compile(ctx.output.post_format(self.format.as_deref()))?;
        let query = self.query.as_deref().map(Query::raw);

        let posts = if self.all {
            PostPager::with_per_page(
                ctx.api.clone(),
                ctx.domain.clone(),
                query.unwrap_or_else(Query::match_all),
                self.per_page,
            )?
            .with_cancellation(ctx.cancellation.clone())
            .collect_all()
            .await?
        } else {
            let options = ListOptions::new(self.page, self.per_page)?;
            ListPostsUseCase::new(ctx.api.clone(), ctx.domain.clone())
                .with_cancellation(ctx.cancellation.clone())
                .execute(ListPostsInput::new(query, options))
                .await?
                .posts
        };
        debug!("Rendering {} posts", posts.len());

        for post in &posts {
            writeln!(out, "{}", renderer.render_post(post)?)?;
        }
        Ok(())
    }
}
