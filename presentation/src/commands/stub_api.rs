//! In-memory [`DocbaseApi`] for command tests

use async_trait::async_trait;
use docbase_application::{ApiError, DocbaseApi, PageMeta, PostEdit, PostPage};
use docbase_domain::{Domain, ListOptions, Post, PostId, Query, Tag};
use std::sync::Mutex;

pub(crate) struct StubApi {
    pub posts: Mutex<Vec<Post>>,
    pub tags: Vec<Tag>,
    pub queries: Mutex<Vec<(String, u32, u32)>>,
}

impl StubApi {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            tags: vec![],
            queries: Mutex::new(vec![]),
        }
    }

    pub fn with_tags(mut self, names: &[&str]) -> Self {
        self.tags = names.iter().map(|n| Tag::new(*n)).collect();
        self
    }

    fn matches(post: &Post, query: &str) -> bool {
        match query.strip_prefix("tag:") {
            Some(tag) => post.has_tag(tag),
            None => true,
        }
    }
}

#[async_trait]
impl DocbaseApi for StubApi {
    async fn list_posts(
        &self,
        _domain: &Domain,
        query: &Query,
        options: ListOptions,
    ) -> Result<PostPage, ApiError> {
        self.queries.lock().unwrap().push((
            query.as_str().to_string(),
            options.page(),
            options.per_page(),
        ));
        let matching: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| Self::matches(p, query.as_str()))
            .cloned()
            .collect();
        let start = ((options.page() - 1) * options.per_page()) as usize;
        let end = (start + options.per_page() as usize).min(matching.len());
        let posts = if start < matching.len() {
            matching[start..end].to_vec()
        } else {
            vec![]
        };
        let next_page = (end < matching.len()).then(|| format!("page={}", options.page() + 1));
        Ok(PostPage::new(
            posts,
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
            .ok_or(ApiError::Http {
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
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::Http {
                status: 404,
                message: "Not Found".to_string(),
            })?;
        post.tags = edit.tags.iter().map(|t| Tag::new(t.as_str())).collect();
        Ok(post.clone())
    }

    async fn list_tags(&self, _domain: &Domain) -> Result<Vec<Tag>, ApiError> {
        Ok(self.tags.clone())
    }
}

pub(crate) fn domain() -> Domain {
    Domain::new("myteam").unwrap()
}
