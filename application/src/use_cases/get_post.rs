//! Get Post use case

use crate::ports::docbase_api::DocbaseApi;
use crate::use_cases::shared::{FetchError, check_cancelled};
use docbase_domain::{Domain, Post, PostId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Use case for fetching a single post by id
pub struct GetPostUseCase {
    api: Arc<dyn DocbaseApi>,
    domain: Domain,
    cancellation_token: Option<CancellationToken>,
}

impl GetPostUseCase {
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

    pub async fn execute(&self, id: PostId) -> Result<Post, FetchError> {
        info!("Fetching post {} from {}", id, self.domain);
        check_cancelled(&self.cancellation_token)?;
        Ok(self.api.get_post(&self.domain, id).await?)
    }
}
