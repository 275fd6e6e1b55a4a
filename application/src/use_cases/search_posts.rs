//! Search Posts use case
//!
//! Asks the service for posts whose title or body matches a text, then
//! localizes each hit with the text scanner. The scanner does not re-filter:
//! a post the service returned but the literal text does not occur in (the
//! service matches more loosely) simply yields no lines.

use crate::ports::docbase_api::DocbaseApi;
use crate::use_cases::shared::{FetchError, check_cancelled};
use docbase_domain::{Domain, ListOptions, Query, QueryExpression, TextMatch, join, scan_post};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Input for the [`SearchPostsUseCase`].
#[derive(Debug, Clone)]
pub struct SearchPostsInput {
    /// Literal text to search for
    pub text: String,
    pub options: ListOptions,
}

impl SearchPostsInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: ListOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// `title:<text> OR body:<text>`
    pub fn query(&self) -> Query {
        join([
            QueryExpression::title(&self.text),
            QueryExpression::or(),
            QueryExpression::body(&self.text),
        ])
    }
}

/// Output of the [`SearchPostsUseCase`].
#[derive(Debug, Clone, Default)]
pub struct SearchPostsOutput {
    /// Number of posts the service returned
    pub posts_matched: usize,
    /// Matching lines, grouped by post in service order
    pub matches: Vec<TextMatch>,
}

/// Use case for searching posts and localizing the hits
pub struct SearchPostsUseCase {
    api: Arc<dyn DocbaseApi>,
    domain: Domain,
    cancellation_token: Option<CancellationToken>,
}

impl SearchPostsUseCase {
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

    pub async fn execute(&self, input: SearchPostsInput) -> Result<SearchPostsOutput, FetchError> {
        let query = input.query();
        info!("Searching {} for {:?}", self.domain, input.text);

        check_cancelled(&self.cancellation_token)?;
        let page = self
            .api
            .list_posts(&self.domain, &query, input.options)
            .await?;

        let matches: Vec<TextMatch> = page
            .posts
            .iter()
            .flat_map(|post| scan_post(post, &input.text))
            .collect();
        debug!(
            "{} posts returned, {} matching lines",
            page.posts.len(),
            matches.len()
        );

        Ok(SearchPostsOutput {
            posts_matched: page.posts.len(),
            matches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::mock_api::{MockApi, domain};
    use docbase_domain::{Post, PostId};

    #[tokio::test]
    async fn test_query_is_title_or_body() {
        let api = Arc::new(MockApi::new(vec![]));
        let use_case = SearchPostsUseCase::new(api.clone(), domain());

        use_case.execute(SearchPostsInput::new("rust")).await.unwrap();

        let calls = api.list_calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("title:rust OR body:rust".to_string(), 1, 20)]);
    }

    #[tokio::test]
    async fn test_matches_are_localized_per_line() {
        let api = Arc::new(MockApi::new(vec![
            Post::new(PostId::new(1), "alpha notes", "alpha\nbeta\nalpha"),
            Post::new(PostId::new(2), "other", "nothing here"),
        ]));
        let use_case = SearchPostsUseCase::new(api, domain());

        let output = use_case.execute(SearchPostsInput::new("alpha")).await.unwrap();

        assert_eq!(output.posts_matched, 1);
        let coords: Vec<_> = output
            .matches
            .iter()
            .map(|m| (m.post_id.value(), m.line, m.column))
            .collect();
        assert_eq!(coords, vec![(1, 0, 1), (1, 1, 1), (1, 3, 1)]);
    }

    #[tokio::test]
    async fn test_spaced_text_is_quoted_in_query() {
        let input = SearchPostsInput::new("hello world");
        assert_eq!(
            input.query().as_str(),
            "title:\"hello world\" OR body:\"hello world\""
        );
    }
}
