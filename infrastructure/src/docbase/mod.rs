//! DocBase REST API adapter.

mod client;
mod wire;

pub use client::DocbaseClient;
