//! DocBase API v2 wire types
//!
//! Only the fields this client uses are decoded; everything else the
//! service sends is ignored.

use chrono::{DateTime, FixedOffset};
use docbase_application::PageMeta;
use docbase_domain::{Post, PostId, Tag};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PostDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub tags: Vec<TagDto>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Post {
            id: PostId::new(dto.id),
            title: dto.title,
            body: dto.body,
            draft: dto.draft,
            url: dto.url,
            created_at: dto.created_at,
            tags: dto.tags.into_iter().map(Tag::from).collect(),
            scope: dto.scope,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagDto {
    pub name: String,
}

impl From<TagDto> for Tag {
    fn from(dto: TagDto) -> Self {
        Tag::new(dto.name)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetaDto {
    #[serde(default)]
    pub previous_page: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl From<MetaDto> for PageMeta {
    fn from(dto: MetaDto) -> Self {
        PageMeta {
            previous_page: dto.previous_page,
            next_page: dto.next_page,
            total: dto.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListPostsResponse {
    pub posts: Vec<PostDto>,
    #[serde(default)]
    pub meta: Option<MetaDto>,
}

/// Error body, e.g. `{"error": "bad_request", "messages": ["..."]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        if !self.messages.is_empty() {
            Some(self.messages.join(", "))
        } else {
            self.error.clone()
        }
    }
}
