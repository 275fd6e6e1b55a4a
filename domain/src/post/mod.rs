//! Posts and the pagination window used to list them.

pub mod entities;
pub mod list_options;
