//! Locating search hits inside post text.

pub mod scanner;
