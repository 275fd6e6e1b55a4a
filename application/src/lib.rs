//! Application layer for docbase-cli
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    docbase_api::{ApiError, DocbaseApi, PageMeta, PostEdit, PostPage},
    progress::{NoRenameProgress, RenameProgressNotifier},
};
pub use use_cases::FetchError;
pub use use_cases::get_post::GetPostUseCase;
pub use use_cases::list_posts::{ListPostsInput, ListPostsUseCase};
pub use use_cases::list_tags::ListTagsUseCase;
pub use use_cases::pager::PostPager;
pub use use_cases::rename_tags::{
    RenameOutcome, RenameReport, RenameTagsError, RenameTagsInput, RenameTagsUseCase, RenamedPost,
};
pub use use_cases::search_posts::{SearchPostsInput, SearchPostsOutput, SearchPostsUseCase};
