//! Rename Tags use case
//!
//! For each `old -> new` pair of a [`RenameMapping`], in mapping order:
//!
//! 1. Collect **every** post tagged `old` through [`PostPager`]. All pages
//!    are read before the first edit, because editing removes posts from
//!    the `tag:old` result set and would shift later pages.
//! 2. Rewrite each post's tag list with [`rewrite_tags`].
//! 3. Send an edit carrying only the new tag list.
//!
//! The first failure aborts the run. Posts edited before it stay edited:
//! there is no rollback, and re-running the same mapping only touches posts
//! that still carry the old tag.

use crate::ports::docbase_api::{ApiError, DocbaseApi, PostEdit};
use crate::ports::progress::{NoRenameProgress, RenameProgressNotifier};
use crate::use_cases::pager::PostPager;
use crate::use_cases::shared::{FetchError, is_cancelled};
use docbase_domain::{
    Domain, PostId, Query, QueryExpression, RenameMapping, RenamePair, rewrite_tags,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can occur during a tag rename
///
/// `updated` counts the posts edited by this run before it stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameTagsError {
    #[error("Failed to list posts tagged '{tag}': {source}")]
    List {
        tag: String,
        updated: usize,
        #[source]
        source: ApiError,
    },

    #[error("Failed to update post {post_id} ({updated} posts already updated): {source}")]
    Edit {
        post_id: PostId,
        updated: usize,
        #[source]
        source: ApiError,
    },

    #[error("Rename cancelled ({updated} posts already updated)")]
    Cancelled { updated: usize },
}

impl RenameTagsError {
    /// Posts edited before the run stopped
    pub fn updated(&self) -> usize {
        match self {
            Self::List { updated, .. } | Self::Edit { updated, .. } | Self::Cancelled { updated } => {
                *updated
            }
        }
    }
}

/// Input for the [`RenameTagsUseCase`].
#[derive(Debug, Clone)]
pub struct RenameTagsInput {
    pub mapping: RenameMapping,
    /// Compute the new tag lists without sending any edit
    pub dry_run: bool,
}

impl RenameTagsInput {
    pub fn new(mapping: RenameMapping) -> Self {
        Self {
            mapping,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// A post's tag list after renaming
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedPost {
    pub id: PostId,
    pub title: String,
    pub tags: Vec<String>,
}

/// Result of one rename pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub pair: RenamePair,
    /// Updated posts, or posts that would be updated on a dry run
    pub posts: Vec<RenamedPost>,
}

/// Result of a whole rename run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
    pub dry_run: bool,
}

impl RenameReport {
    pub fn total_posts(&self) -> usize {
        self.outcomes.iter().map(|o| o.posts.len()).sum()
    }
}

/// Use case for renaming tags across all posts
pub struct RenameTagsUseCase {
    api: Arc<dyn DocbaseApi>,
    domain: Domain,
    cancellation_token: Option<CancellationToken>,
}

impl RenameTagsUseCase {
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

    /// Execute the rename with default (no-op) progress
    pub async fn execute(&self, input: RenameTagsInput) -> Result<RenameReport, RenameTagsError> {
        self.execute_with_progress(input, &NoRenameProgress).await
    }

    /// Execute the rename with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RenameTagsInput,
        progress: &dyn RenameProgressNotifier,
    ) -> Result<RenameReport, RenameTagsError> {
        info!(
            "Renaming {} tags in {}{}",
            input.mapping.len(),
            self.domain,
            if input.dry_run { " (dry run)" } else { "" }
        );

        let mut report = RenameReport {
            outcomes: Vec::with_capacity(input.mapping.len()),
            dry_run: input.dry_run,
        };
        let mut updated = 0;

        for pair in input.mapping.pairs() {
            let outcome = self
                .rename_pair(pair, input.dry_run, progress, &mut updated)
                .await?;
            report.outcomes.push(outcome);
        }

        info!("Rename finished: {} posts", report.total_posts());
        Ok(report)
    }

    async fn rename_pair(
        &self,
        pair: &RenamePair,
        dry_run: bool,
        progress: &dyn RenameProgressNotifier,
        updated: &mut usize,
    ) -> Result<RenameOutcome, RenameTagsError> {
        let query = Query::from(QueryExpression::tag(&pair.old));
        let mut pager = PostPager::new(Arc::clone(&self.api), self.domain.clone(), query);
        if let Some(token) = &self.cancellation_token {
            pager = pager.with_cancellation(token.clone());
        }

        let posts = pager.collect_all().await.map_err(|e| match e {
            FetchError::Cancelled => RenameTagsError::Cancelled { updated: *updated },
            FetchError::Api(source) => RenameTagsError::List {
                tag: pair.old.clone(),
                updated: *updated,
                source,
            },
        })?;
        debug!("{} posts tagged '{}'", posts.len(), pair.old);
        progress.on_pair_start(pair, posts.len());

        let mut renamed = Vec::with_capacity(posts.len());
        for post in posts {
            let tags = rewrite_tags(&post.tags, &pair.old, &pair.new);

            if !dry_run {
                if is_cancelled(&self.cancellation_token) {
                    return Err(RenameTagsError::Cancelled { updated: *updated });
                }
                debug!("Updating post {}: {:?}", post.id, tags);
                self.api
                    .edit_post(&self.domain, post.id, &PostEdit::tags(tags.clone()))
                    .await
                    .map_err(|source| RenameTagsError::Edit {
                        post_id: post.id,
                        updated: *updated,
                        source,
                    })?;
                *updated += 1;
                progress.on_post_renamed(pair, post.id);
            }

            renamed.push(RenamedPost {
                id: post.id,
                title: post.title,
                tags,
            });
        }

        progress.on_pair_complete(pair, renamed.len());
        Ok(RenameOutcome {
            pair: pair.clone(),
            posts: renamed,
        })
    }
}
