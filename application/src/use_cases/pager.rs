//! Complete post listing across pages.
//!
//! Requests pages 1, 2, ... with a fixed page size until an empty page
//! comes back or the service reports there is no next page. Calls are
//! strictly sequential.

use crate::ports::docbase_api::DocbaseApi;
use crate::use_cases::shared::{FetchError, check_cancelled};
use docbase_domain::{Domain, DomainError, ListOptions, MAX_PER_PAGE, Post, Query};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Walks every page of a post listing
pub struct PostPager {
    api: Arc<dyn DocbaseApi>,
    domain: Domain,
    query: Query,
    /// Window for the next request; `None` once the listing is exhausted
    next: Option<ListOptions>,
    cancellation_token: Option<CancellationToken>,
}

impl PostPager {
    /// Start a listing at page 1 with the largest page size the service allows
    pub fn new(api: Arc<dyn DocbaseApi>, domain: Domain, query: Query) -> Self {
        let first = ListOptions::new(1, MAX_PER_PAGE).unwrap_or_default();
        Self::starting_at(api, domain, query, first)
    }

    /// Start a listing at page 1 with a given page size
    pub fn with_per_page(
        api: Arc<dyn DocbaseApi>,
        domain: Domain,
        query: Query,
        per_page: u32,
    ) -> Result<Self, DomainError> {
        let first = ListOptions::new(1, per_page)?;
        Ok(Self::starting_at(api, domain, query, first))
    }

    fn starting_at(
        api: Arc<dyn DocbaseApi>,
        domain: Domain,
        query: Query,
        first: ListOptions,
    ) -> Self {
        let query = if query.is_empty() {
            Query::match_all()
        } else {
            query
        };
        Self {
            api,
            domain,
            query,
            next: Some(first),
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Fetch the next page. `Ok(None)` once the listing is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Post>>, FetchError> {
        let Some(options) = self.next else {
            return Ok(None);
        };
        check_cancelled(&self.cancellation_token)?;

        debug!(
            "Fetching page {} (per_page={}) for {:?}",
            options.page(),
            options.per_page(),
            self.query.as_str()
        );
        let page = self
            .api
            .list_posts(&self.domain, &self.query, options)
            .await?;

        self.next = page.may_have_next().then(|| options.next());
        if page.posts.is_empty() {
            return Ok(None);
        }
        Ok(Some(page.posts))
    }

    /// Drain every remaining page into one vector, in service order.
    pub async fn collect_all(mut self) -> Result<Vec<Post>, FetchError> {
        let mut all = Vec::new();
        while let Some(posts) = self.next_page().await? {
            all.extend(posts);
        }
        Ok(all)
    }
}
