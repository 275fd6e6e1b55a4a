//! Domain layer for docbase-cli
//!
//! This crate contains the entities, value objects and pure logic of the
//! client. It has no dependencies on HTTP, configuration or terminal concerns.
//!
//! # Core Concepts
//!
//! - **Domain**: the team namespace every API call is scoped to
//! - **Post** / **Tag**: resources owned by the remote service
//! - **QueryExpression**: structured predicates serialized into the
//!   service's search syntax
//! - **RenameMapping**: old-tag to new-tag substitutions applied across posts

pub mod core;
pub mod post;
pub mod query;
pub mod search;
pub mod tag;

// Re-export commonly used types
pub use core::{error::DomainError, team::Domain};
pub use post::{
    entities::{Post, PostId, Tag},
    list_options::{DEFAULT_PAGE, DEFAULT_PER_PAGE, ListOptions, MAX_PER_PAGE},
};
pub use query::expression::{Query, QueryExpression, join};
pub use search::scanner::{TextMatch, scan_post, scan_text};
pub use tag::rename::{RenameMapping, RenamePair, rewrite_tags};
