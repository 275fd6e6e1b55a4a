//! List Posts use case
//!
//! Fetches exactly one page of posts. Walking every page is
//! [`PostPager`](super::pager::PostPager)'s job.

use crate::ports::docbase_api::{DocbaseApi, PostPage};
use crate::use_cases::shared::{FetchError, check_cancelled};
use docbase_domain::{Domain, ListOptions, Query};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Input for the [`ListPostsUseCase`].
#[derive(Debug, Clone, Default)]
pub struct ListPostsInput {
    /// Search query; `None` or empty lists everything
    pub query: Option<Query>,
    pub options: ListOptions,
}

impl ListPostsInput {
    pub fn new(query: Option<Query>, options: ListOptions) -> Self {
        Self { query, options }
    }

    /// The query actually sent: the caller's, or `*` when there is none.
    pub fn effective_query(&self) -> Query {
        match &self.query {
            Some(q) if !q.is_empty() => q.clone(),
            _ => Query::match_all(),
        }
    }
}

/// Use case for listing a single page of posts
pub struct ListPostsUseCase {
    api: Arc<dyn DocbaseApi>,
    domain: Domain,
    cancellation_token: Option<CancellationToken>,
}

impl ListPostsUseCase {
    pub fn new(api: Arc<dyn DocbaseApi>, domain: Domain) -> Self {
        Self {
            api,
            domain,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub async fn execute(&self, input: ListPostsInput) -> Result<PostPage, FetchError> {
        let query = input.effective_query();
        info!(
            "Listing posts in {} (query={:?}, page={}, per_page={})",
            self.domain,
            query.as_str(),
            input.options.page(),
            input.options.per_page()
        );

        check_cancelled(&self.cancellation_token)?;
        let page = self
            .api
            .list_posts(&self.domain, &query, input.options)
            .await?;

        debug!("Received {} posts", page.posts.len());
        Ok(page)
    }
}
