//! Shared utilities for use cases.
//!
//! Cancellation is checked at remote-call boundaries only: an in-flight
//! request always runs to completion or to its own transport error.

use crate::ports::docbase_api::ApiError;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors from read-only use cases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl FetchError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Check if cancellation has been requested.
pub(crate) fn is_cancelled(token: &Option<CancellationToken>) -> bool {
    token.as_ref().is_some_and(CancellationToken::is_cancelled)
}

/// Returns `Err(FetchError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), FetchError> {
    if is_cancelled(token) {
        return Err(FetchError::Cancelled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_cancelled() {
        assert!(check_cancelled(&None).is_ok());

        let token = CancellationToken::new();
        assert!(check_cancelled(&Some(token.clone())).is_ok());
        token.cancel();
        assert_eq!(check_cancelled(&Some(token)), Err(FetchError::Cancelled));
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: FetchError = ApiError::Transport("connection reset".to_string()).into();
        assert_eq!(err.to_string(), "Transport error: connection reset");
        assert!(!err.is_cancelled());
    }
}
