//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod resource;

pub use resource::PostResource;
