//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant describes malformed input. None of them involve the
/// remote service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Invalid rename mapping: {0}")]
    InvalidRenameMapping(String),

    #[error("Invalid post id: {0}")]
    InvalidPostId(String),
}
