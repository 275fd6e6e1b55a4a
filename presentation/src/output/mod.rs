//! Output formatting and template rendering

pub mod console;
pub mod formatter;
