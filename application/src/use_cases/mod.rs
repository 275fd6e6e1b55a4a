//! Use cases
//!
//! Application-level operations that orchestrate domain logic over the
//! DocBase API port.

pub mod get_post;
pub mod list_posts;
pub mod list_tags;
pub mod pager;
pub mod rename_tags;
pub mod search_posts;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod mock_api;

pub use shared::FetchError;
