//! # Postboard Infrastructure
//!
//! Concrete implementations of the `PostResource` port defined in
//! `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `http` (default) - REST client for a remote `/posts` collection via reqwest
//!
//! With default features off only the in-memory resource is built.

pub mod memory;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use memory::InMemoryPostResource;

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{ConfigError, HttpPostResource, HttpResourceConfig};
