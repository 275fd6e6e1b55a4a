//! Search query construction.
//!
//! See [`expression`] for the predicate types and the serialization rules.

pub mod expression;
