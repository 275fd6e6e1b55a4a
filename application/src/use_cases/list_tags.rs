//! List Tags use case

use crate::ports::docbase_api::DocbaseApi;
use crate::use_cases::shared::{FetchError, check_cancelled};
use docbase_domain::{Domain, Tag};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Use case for listing every tag of the team
pub struct ListTagsUseCase {
    api: Arc<dyn DocbaseApi>,
    domain: Domain,
    cancellation_token: Option<CancellationToken>,
}

impl ListTagsUseCase {
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

    pub async fn execute(&self) -> Result<Vec<Tag>, FetchError> {
        info!("Listing tags of {}", self.domain);
        check_cancelled(&self.cancellation_token)?;
        Ok(self.api.list_tags(&self.domain).await?)
    }
}
