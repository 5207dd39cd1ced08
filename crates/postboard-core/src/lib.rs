//! # Postboard Core
//!
//! The domain layer of Postboard.
//! Posts, the single-slot edit draft, the `PostResource` port and the
//! `PostListEditor` state container. No I/O happens in this crate; all
//! persistence goes through the port.

pub mod domain;
pub mod editor;
pub mod error;
pub mod ports;

pub use editor::PostListEditor;
pub use error::{EditorError, RemoteError};
