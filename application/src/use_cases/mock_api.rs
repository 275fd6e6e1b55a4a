//! In-memory `DocbaseApi` used by the use case tests.

use crate::ports::docbase_api::{ApiError, DocbaseApi, PageMeta, PostEdit, PostPage};
use async_trait::async_trait;
use docbase_domain::{Domain, ListOptions, Post, PostId, Query, Tag};
use std::sync::Mutex;

/// Serves posts from memory and applies edits to them.
///
/// `tag:<name>` queries filter by tag, `*` and the empty query match all,
/// anything else matches posts whose title or body contains the text after
/// the first `:` of the first term.
pub(crate) struct MockApi {
    pub posts: Mutex<Vec<Post>>,
    pub tags: Vec<Tag>,
    /// (query, page, per_page) of every list call
    pub list_calls: Mutex<Vec<(String, u32, u32)>>,
    /// (post id, tags) of every successful edit call
    pub edits: Mutex<Vec<(PostId, Vec<String>)>>,
    pub edit_attempts: Mutex<usize>,
    /// Fail the N-th edit call (1-based)
    pub fail_edit_at: Option<usize>,
    pub fail_list: bool,
}

impl MockApi {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            tags: Vec::new(),
            list_calls: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            edit_attempts: Mutex::new(0),
            fail_edit_at: None,
            fail_list: false,
        }
    }

    pub fn with_tags(mut self, names: &[&str]) -> Self {
        self.tags = names.iter().map(|n| Tag::new(*n)).collect();
        self
    }

    pub fn failing_edit_at(mut self, n: usize) -> Self {
        self.fail_edit_at = Some(n);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn edit_count(&self) -> usize {
        self.edits.lock().unwrap().len()
    }

    pub fn post(&self, id: i64) -> Post {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == PostId::new(id))
            .cloned()
            .unwrap()
    }

    fn matches(post: &Post, query: &str) -> bool {
        if query.is_empty() || query == "*" {
            return true;
        }
        if let Some(tag) = query.strip_prefix("tag:") {
            return post.has_tag(tag);
        }
        let first_term = query.split_whitespace().next().unwrap_or_default();
        let needle = first_term.split_once(':').map_or(first_term, |(_, v)| v);
        post.title.contains(needle) || post.body.contains(needle)
    }
}

pub(crate) fn domain() -> Domain {
    Domain::new("testteam").unwrap()
}

#[async_trait]
impl DocbaseApi for MockApi {
    async fn list_posts(
        &self,
        _domain: &Domain,
        query: &Query,
        options: ListOptions,
    ) -> Result<PostPage, ApiError> {
        self.list_calls.lock().unwrap().push((
            query.to_string(),
            options.page(),
            options.per_page(),
        ));
        if self.fail_list {
            return Err(ApiError::Http {
                status: 500,
                message: "list failed".to_string(),
            });
        }

        let matching: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| Self::matches(p, query.as_str()))
            .cloned()
            .collect();
        let per_page = options.per_page() as usize;
        let start = (options.page() as usize - 1) * per_page;
        let page: Vec<Post> = matching.iter().skip(start).take(per_page).cloned().collect();
        let next_page = (start + per_page < matching.len())
            .then(|| format!("page={}", options.page() + 1));

        Ok(PostPage::new(
            page,
            Some(PageMeta {
                previous_page: None,
                next_page,
                total: Some(matching.len() as u64),
            }),
        ))
    }

    async fn get_post(&self, _domain: &Domain, id: PostId) -> Result<Post, ApiError> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Http {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn edit_post(
        &self,
        _domain: &Domain,
        id: PostId,
        edit: &PostEdit,
    ) -> Result<Post, ApiError> {
        let attempt = {
            let mut attempts = self.edit_attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if self.fail_edit_at == Some(attempt) {
            return Err(ApiError::Http {
                status: 429,
                message: "rate limited".to_string(),
            });
        }

        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::Http {
                status: 404,
                message: "Not Found".to_string(),
            })?;
        post.tags = edit.tags.iter().map(|t| Tag::new(t.as_str())).collect();
        self.edits.lock().unwrap().push((id, edit.tags.clone()));
        Ok(post.clone())
    }

    async fn list_tags(&self, _domain: &Domain) -> Result<Vec<Tag>, ApiError> {
        Ok(self.tags.clone())
    }
}
