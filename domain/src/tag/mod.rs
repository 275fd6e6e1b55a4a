//! Tag renaming value objects and the tag-list rewrite rule.

pub mod rename;
