//! Pagination window value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Largest page size the service accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Page number (1-based) and page size for a list call
///
/// Only constructible through [`ListOptions::new`] or [`Default`], so a
/// value always holds a positive page and a page size in `1..=MAX_PER_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    page: u32,
    per_page: u32,
}

impl ListOptions {
    pub fn new(page: u32, per_page: u32) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPagination(
                "page must be 1 or greater".to_string(),
            ));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(DomainError::InvalidPagination(format!(
                "per-page must be between 1 and {}, got {}",
                MAX_PER_PAGE, per_page
            )));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// The window immediately after this one, same page size
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
