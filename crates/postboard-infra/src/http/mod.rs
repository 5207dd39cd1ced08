//! REST adapter for a remote `/posts` collection.

mod client;
mod config;

pub use client::HttpPostResource;
pub use config::{ConfigError, DEFAULT_BASE_URL, HttpResourceConfig};
