//! DocBase API client
//!
//! Implements [`DocbaseApi`] over HTTPS with `reqwest`. Every request
//! carries the access token in `X-DocBaseToken` and selects API version 2.
//! Requests are sent one at a time and never retried.

use super::wire::{ErrorResponse, ListPostsResponse, PostDto, TagDto};
use crate::config::ApiSettings;
use async_trait::async_trait;
use docbase_application::{ApiError, DocbaseApi, PostEdit, PostPage};
use docbase_domain::{Domain, ListOptions, Post, PostId, Query, Tag};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const TOKEN_HEADER: &str = "X-DocBaseToken";
const API_VERSION_HEADER: &str = "X-Api-Version";
const API_VERSION: &str = "2";

/// HTTP adapter for the DocBase API
#[derive(Clone)]
pub struct DocbaseClient {
    client: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl DocbaseClient {
    /// Create a client from resolved settings
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("docbase-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            token: settings.token.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(TOKEN_HEADER, self.token.expose_secret())
            .header(API_VERSION_HEADER, API_VERSION)
    }

    /// Send a request and decode a JSON body, mapping every failure mode
    /// onto [`ApiError`].
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("Unknown").to_string()
                    } else {
                        body.trim().to_string()
                    }
                });
            warn!("DocBase API returned {}: {}", status.as_u16(), message);
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DocbaseApi for DocbaseClient {
    async fn list_posts(
        &self,
        domain: &Domain,
        query: &Query,
        options: ListOptions,
    ) -> Result<PostPage, ApiError> {
        let page = options.page().to_string();
        let per_page = options.per_page().to_string();
        let request = self
            .request(Method::GET, &format!("/teams/{}/posts", domain))
            .query(&[
                ("q", query.as_str()),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
            ]);

        let response: ListPostsResponse = self.send(request).await?;
        Ok(PostPage::new(
            response.posts.into_iter().map(Post::from).collect(),
            response.meta.map(Into::into),
        ))
    }

    async fn get_post(&self, domain: &Domain, id: PostId) -> Result<Post, ApiError> {
        let request = self.request(Method::GET, &format!("/teams/{}/posts/{}", domain, id));
        let post: PostDto = self.send(request).await?;
        Ok(post.into())
    }

    async fn edit_post(
        &self,
        domain: &Domain,
        id: PostId,
        edit: &PostEdit,
    ) -> Result<Post, ApiError> {
        let request = self
            .request(Method::PATCH, &format!("/teams/{}/posts/{}", domain, id))
            .json(edit);
        let post: PostDto = self.send(request).await?;
        Ok(post.into())
    }

    async fn list_tags(&self, domain: &Domain) -> Result<Vec<Tag>, ApiError> {
        let request = self.request(Method::GET, &format!("/teams/{}/tags", domain));
        let tags: Vec<TagDto> = self.send(request).await?;
        Ok(tags.into_iter().map(Tag::from).collect())
    }
}
