//! DocBase API port
//!
//! Defines the interface for talking to the DocBase REST API.

use async_trait::async_trait;
use docbase_domain::{Domain, ListOptions, Post, PostId, Query, Tag};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by a remote API call
///
/// Network failures, auth failures, rate limits and validation errors all
/// surface here. Nothing in the application layer retries them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Check if the service rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Pagination metadata returned alongside a page of posts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
    pub total: Option<u64>,
}

/// One page of a post listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    /// `None` when the service did not send pagination metadata
    pub meta: Option<PageMeta>,
}

impl PostPage {
    pub fn new(posts: Vec<Post>, meta: Option<PageMeta>) -> Self {
        Self { posts, meta }
    }

    /// Whether another page may follow.
    ///
    /// An empty page always ends a listing. Otherwise trust `next_page`
    /// when metadata is present and assume more when it is not.
    pub fn may_have_next(&self) -> bool {
        if self.posts.is_empty() {
            return false;
        }
        match &self.meta {
            Some(meta) => meta.next_page.is_some(),
            None => true,
        }
    }
}

/// Fields sent by an edit call. Only the tag list is ever changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEdit {
    pub tags: Vec<String>,
}

impl PostEdit {
    pub fn tags(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

/// Port for the DocBase API
///
/// Every call is scoped to a team [`Domain`]. Authentication is the
/// adapter's concern. Implementations live in the infrastructure layer.
#[async_trait]
pub trait DocbaseApi: Send + Sync {
    /// Fetch one page of posts matching `query`
    async fn list_posts(
        &self,
        domain: &Domain,
        query: &Query,
        options: ListOptions,
    ) -> Result<PostPage, ApiError>;

    /// Fetch a single post
    async fn get_post(&self, domain: &Domain, id: PostId) -> Result<Post, ApiError>;

    /// Update a post, returning the post as stored after the edit
    async fn edit_post(&self, domain: &Domain, id: PostId, edit: &PostEdit)
    -> Result<Post, ApiError>;

    /// Fetch every tag of the team
    async fn list_tags(&self, domain: &Domain) -> Result<Vec<Tag>, ApiError>;
}
