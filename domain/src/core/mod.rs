//! Core domain concepts shared across all subdomains.
//!
//! - [`team::Domain`] — the team namespace API calls are scoped to
//! - [`error::DomainError`] — domain-level validation errors

pub mod error;
pub mod team;
